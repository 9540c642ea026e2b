//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/api/health` - Service status with cache statistics

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use moviecache_core::cache::CacheStats;

use crate::state::AppState;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub cache: CacheStats,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /api/health - Service health.
///
/// Always 200. Cache problems are reported in the `cache` section.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        database: "connected",
        cache: state.cache.stats().await,
    })
}
