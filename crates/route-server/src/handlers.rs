//! HTTP Handlers

use axum::{extract::State, Json};
use serde::Serialize;

use route_core::RouteManifest;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub routes: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        routes: state.manifest.routes.len(),
    })
}

/// Route table as declared, for tooling and debugging
pub async fn route_manifest(State(state): State<AppState>) -> Json<RouteManifest> {
    Json(state.manifest.as_ref().clone())
}
