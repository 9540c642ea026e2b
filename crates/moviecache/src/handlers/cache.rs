//! Cache administration endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use moviecache_core::cache::{namespace_pattern, CacheStats};

use crate::state::AppState;

/// Query parameters for clearing the cache.
#[derive(Debug, Deserialize)]
pub struct ClearQuery {
    /// Glob pattern of keys to remove (default: `movie_cache:*`).
    pub pattern: Option<String>,
}

/// Body of `DELETE /api/cache/clear`.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub keys_deleted: u64,
    pub pattern: String,
}

/// Get cache statistics (GET /api/cache/stats).
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}

/// Clear cache entries matching a pattern (DELETE /api/cache/clear).
///
/// A disabled cache reports zero deleted keys rather than an error.
pub async fn clear_cache(
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> Json<ClearResponse> {
    let pattern = query.pattern.unwrap_or_else(namespace_pattern);
    let keys_deleted = state.cache.delete_matching(&pattern).await;

    Json(ClearResponse {
        message: "Cache cleared successfully".to_string(),
        keys_deleted,
        pattern,
    })
}
