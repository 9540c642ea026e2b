use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        cache::{cache_stats, clear_cache},
        health::{health, livez},
        movies::{
            movies_by_director, movies_by_genre, movies_by_year_range, movies_statistics,
            movies_with_actor, search_movies, top_movies,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let movie_routes = Router::new()
        .route("/search", get(search_movies))
        .route("/director", get(movies_by_director))
        .route("/top", get(top_movies))
        .route("/genre", get(movies_by_genre))
        .route("/year-range", get(movies_by_year_range))
        .route("/actor", get(movies_with_actor))
        .route("/statistics", get(movies_statistics));

    // API routes with CORS
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/cache/stats", get(cache_stats))
        .route("/cache/clear", delete(clear_cache))
        .nest("/movies", movie_routes)
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
