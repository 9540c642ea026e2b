//! Shared application state.
//!
//! Built once in `main` and cloned into every handler. The movie repository is
//! the cached decorator, so handlers never deal with the cache directly except
//! for the admin and health endpoints.

use std::sync::Arc;

use moviecache_core::movies::MovieRepository;

use crate::cache::{CacheAside, CacheClient};
use crate::storage::{CachedMovieRepository, InMemoryMovieRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Movie lookups, served through the cache.
    pub movies: Arc<dyn MovieRepository>,
    /// The process-wide cache client, for stats and clearing.
    pub cache: Arc<CacheClient>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository>, cache: Arc<CacheClient>) -> Self {
        Self { movies, cache }
    }

    /// Wires the seeded in-memory collection behind the cache-aside decorator.
    pub fn with_sample_data(cache: Arc<CacheClient>) -> Self {
        let repository = Arc::new(InMemoryMovieRepository::seeded());
        let movies = CachedMovieRepository::new(repository, CacheAside::new(cache.clone()));
        Self::new(Arc::new(movies), cache)
    }
}
