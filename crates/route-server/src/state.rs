//! Application State

use std::path::PathBuf;
use std::sync::Arc;

use route_core::{RouteManifest, RouterConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Routes as declared at application start
    pub manifest: Arc<RouteManifest>,
}

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Base path and matching options shared with the front end
    pub router: RouterConfig,

    /// Directory holding the built front end
    pub dist_dir: PathBuf,

    /// Listen address
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(
            RouterConfig::from_env(),
            std::env::var("DIST_DIR").ok(),
            std::env::var("BIND_ADDR").ok(),
        )
    }

    /// Validated configuration; unset values take their defaults
    pub fn new(
        router: RouterConfig,
        dist_dir: Option<String>,
        bind_addr: Option<String>,
    ) -> anyhow::Result<Self> {
        // The base becomes part of axum route paths, where braces start a capture
        let base = router.base();
        if base.contains(['{', '}']) {
            anyhow::bail!("BASE_URL '{base}' must not contain '{{' or '}}'");
        }

        Ok(Self {
            router,
            dist_dir: PathBuf::from(dist_dir.unwrap_or_else(|| "dist".into())),
            bind_addr: bind_addr.unwrap_or_else(|| "0.0.0.0:3000".into()),
        })
    }
}
