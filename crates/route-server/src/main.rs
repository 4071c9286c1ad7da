//! Widget app static server
//!
//! Serves the built front end under its base path. Any path under the base
//! that is not a file gets `index.html`, so deep links work in history mode;
//! the front end's route table decides what renders. Missing files under
//! `{base}/chunks/` are plain 404s so a failed chunk fetch is visible.

mod handlers;
mod state;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_core::{app_routes, RouteManifest};

use crate::handlers::{health_check, route_manifest};
use crate::state::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let manifest = RouteManifest::from_entries(config.router.base(), &app_routes());

    tracing::info!("Declared {} routes:", manifest.routes.len());
    for route in &manifest.routes {
        let binding = if route.binding.is_lazy() { "lazy" } else { "eager" };
        tracing::info!("  {:<10} {:<14} {}", route.path, route.name, binding);
    }

    if !config.dist_dir.join("index.html").exists() {
        tracing::warn!("No index.html in {} - build the front end first", config.dist_dir.display());
    }
    for chunk in manifest.routes.iter().filter_map(|route| route.binding.chunk()) {
        let file = config.dist_dir.join(CHUNK_DIR).join(format!("{chunk}.wasm"));
        if !file.exists() {
            tracing::warn!("Missing chunk {} - its route will fail to load", file.display());
        }
    }

    let state = AppState {
        manifest: Arc::new(manifest),
    };
    let app = build_router(state, &config.dist_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        "Serving {} on http://{}{}/",
        config.dist_dir.display(),
        config.bind_addr,
        config.router.base()
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Directory of lazily fetched view chunks, relative to the base
const CHUNK_DIR: &str = "chunks";

/// Router serving `dist` under the manifest's base path
fn build_router(state: AppState, dist: &Path) -> Router {
    let base = state.manifest.base.clone();
    let index = dist.join("index.html");
    let shell = get(move |uri: Uri| app_shell(uri, index.clone()));
    let spa = ServeDir::new(dist).fallback(shell);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health_check))
        .route(&format!("{base}/routes.json"), get(route_manifest));

    // Nesting at the root is not allowed
    let app = if base.is_empty() {
        app.fallback_service(spa)
    } else {
        app.nest_service(&base, spa)
    };

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `index.html` for client-side routes, 404 for anything under the chunk dir
async fn app_shell(uri: Uri, index: PathBuf) -> Response {
    let in_chunk_dir = uri
        .path()
        .strip_prefix('/')
        .and_then(|path| path.strip_prefix(CHUNK_DIR))
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
    if in_chunk_dir {
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Cannot read {}: {}", index.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
