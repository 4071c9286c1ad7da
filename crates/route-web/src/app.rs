//! Main App Component

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Router;
use route_core::{app_table, RouterConfig};

use crate::api::HttpChunkLoader;
use crate::components::{NavBar, RouteOutlet};

/// Deployment base path, injected at build time
const BASE_URL: Option<&str> = option_env!("BASE_URL");

/// Root application component
///
/// `Router` only tracks the browser location and intercepts links. Matching
/// is left to the route table.
#[component]
pub fn App() -> impl IntoView {
    let config = RouterConfig::with_base(BASE_URL.unwrap_or("/"));
    let loader = Arc::new(HttpChunkLoader::from_window(config.base()));

    let table = match app_table(config, loader) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!(error = %e, "Invalid route table");
            return view! { <p class="error">{e.to_string()}</p> }.into_any();
        }
    };
    let base = table.config().base().to_string();
    provide_context(table);

    view! {
        <Router base=base>
            <NavBar />
            <main class="app">
                <RouteOutlet />
            </main>
        </Router>
    }
    .into_any()
}
