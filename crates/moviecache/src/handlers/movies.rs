//! Movie lookup endpoints.
//!
//! Every handler goes through `AppState::movies`, which is the cached
//! repository. Query values outside their accepted range answer 400.

use std::ops::RangeInclusive;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use moviecache_core::movies::{Movie, MovieStatistics, RepositoryError, TOP_RATED_MAX_LIMIT};

use crate::{handlers::AppError, state::AppState};

/// Default number of movies returned by the top-rated endpoint.
const DEFAULT_TOP_LIMIT: usize = 10;

/// Years accepted by the year-range endpoint.
const ACCEPTED_YEARS: RangeInclusive<u16> = 1800..=2100;

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct YearRangeQuery {
    pub start: u16,
    pub end: u16,
}

/// Search movies by title (GET /api/movies/search?title=).
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.movies.search_by_title(&query.title).await?))
}

/// Movies by director (GET /api/movies/director?name=).
pub async fn movies_by_director(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.movies.by_director(&query.name).await?))
}

/// Top rated movies (GET /api/movies/top?limit=).
pub async fn top_movies(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT);
    if !(1..=TOP_RATED_MAX_LIMIT).contains(&limit) {
        return Err(RepositoryError::InvalidData(format!(
            "limit must be between 1 and {TOP_RATED_MAX_LIMIT}, got {limit}"
        ))
        .into());
    }
    Ok(Json(state.movies.top_rated(limit).await?))
}

/// Movies by genre (GET /api/movies/genre?genre=).
pub async fn movies_by_genre(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.movies.by_genre(&query.genre).await?))
}

/// Movies released within a year range (GET /api/movies/year-range?start=&end=).
pub async fn movies_by_year_range(
    State(state): State<AppState>,
    Query(query): Query<YearRangeQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    for year in [query.start, query.end] {
        if !ACCEPTED_YEARS.contains(&year) {
            return Err(RepositoryError::InvalidData(format!(
                "year {year} is outside {}..={}",
                ACCEPTED_YEARS.start(),
                ACCEPTED_YEARS.end()
            ))
            .into());
        }
    }
    Ok(Json(
        state.movies.by_year_range(query.start, query.end).await?,
    ))
}

/// Movies featuring an actor (GET /api/movies/actor?name=).
pub async fn movies_with_actor(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.movies.with_actor(&query.name).await?))
}

/// Collection statistics (GET /api/movies/statistics).
pub async fn movies_statistics(
    State(state): State<AppState>,
) -> Result<Json<MovieStatistics>, AppError> {
    Ok(Json(state.movies.statistics().await?))
}
