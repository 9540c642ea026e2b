//! Cached movie repository decorator.
//!
//! Wraps a `MovieRepository` implementation with the cache-aside pattern.

use std::sync::Arc;

use async_trait::async_trait;

use moviecache_core::cache::CallArgs;
use moviecache_core::movies::{
    Movie, MovieRepository, MovieStatistics, Result, TOP_RATED_MAX_LIMIT,
};

use crate::cache::{CacheAside, CachePolicy};

/// Cache policies for every movie lookup.
///
/// Text arguments are folded because the lookups themselves are
/// case-insensitive: `"Batman"` and `"batman"` return the same movies.
pub mod policies {
    use super::CachePolicy;

    pub const TITLE_SEARCH: CachePolicy = CachePolicy::new("title_search", 1800).folding_case();
    pub const DIRECTOR: CachePolicy = CachePolicy::new("director", 3600).folding_case();
    pub const GENRE: CachePolicy = CachePolicy::new("genre", 3600).folding_case();
    pub const ACTOR: CachePolicy = CachePolicy::new("actor", 3600).folding_case();
    pub const TOP_RATED: CachePolicy = CachePolicy::new("top_rated", 3600);
    pub const YEAR_RANGE: CachePolicy = CachePolicy::new("year_range", 3600);
    pub const STATISTICS: CachePolicy = CachePolicy::new("statistics", 3600);
}

/// Cached movie repository decorator.
///
/// Only reads exist on a movie collection, so every operation goes through
/// [`CacheAside::get_or_compute`]. Nothing is invalidated here; entries age
/// out with their TTL or are cleared through the cache admin endpoint.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
pub struct CachedMovieRepository<R>
where
    R: MovieRepository,
{
    repository: Arc<R>,
    cache: CacheAside,
}

impl<R> CachedMovieRepository<R>
where
    R: MovieRepository,
{
    /// Creates a new cached movie repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache-aside helper holding the shared cache client
    pub fn new(repository: Arc<R>, cache: CacheAside) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R> MovieRepository for CachedMovieRepository<R>
where
    R: MovieRepository + 'static,
{
    async fn search_by_title(&self, title: &str) -> Result<Vec<Movie>> {
        self.cache
            .get_or_compute(&policies::TITLE_SEARCH, CallArgs::new().arg(title), || {
                self.repository.search_by_title(title)
            })
            .await
    }

    async fn by_director(&self, director: &str) -> Result<Vec<Movie>> {
        self.cache
            .get_or_compute(&policies::DIRECTOR, CallArgs::new().arg(director), || {
                self.repository.by_director(director)
            })
            .await
    }

    async fn top_rated(&self, limit: usize) -> Result<Vec<Movie>> {
        // Limits above the cap return the same movies, so they share one entry
        let limit = limit.min(TOP_RATED_MAX_LIMIT);
        self.cache
            .get_or_compute(&policies::TOP_RATED, CallArgs::new().arg(&limit), || {
                self.repository.top_rated(limit)
            })
            .await
    }

    async fn by_genre(&self, genre: &str) -> Result<Vec<Movie>> {
        self.cache
            .get_or_compute(&policies::GENRE, CallArgs::new().arg(genre), || {
                self.repository.by_genre(genre)
            })
            .await
    }

    async fn by_year_range(&self, start: u16, end: u16) -> Result<Vec<Movie>> {
        let args = CallArgs::new()
            .arg(&start)
            .and_then(|args| args.arg(&end));
        self.cache
            .get_or_compute(&policies::YEAR_RANGE, args, || {
                self.repository.by_year_range(start, end)
            })
            .await
    }

    async fn with_actor(&self, actor: &str) -> Result<Vec<Movie>> {
        self.cache
            .get_or_compute(&policies::ACTOR, CallArgs::new().arg(actor), || {
                self.repository.with_actor(actor)
            })
            .await
    }

    async fn statistics(&self) -> Result<MovieStatistics> {
        self.cache
            .get_or_compute(&policies::STATISTICS, Ok(CallArgs::new()), || {
                self.repository.statistics()
            })
            .await
    }
}
