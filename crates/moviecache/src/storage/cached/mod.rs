//! Cached repository decorators.
//!
//! Reads check the cache first and fall back to the wrapped repository on a
//! miss, storing the result for the operation's TTL. Repository errors are
//! returned as-is and never cached.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(InMemoryMovieRepository::seeded());
//! let cache = Arc::new(CacheClient::from_config(&CacheConfig::from_env()).await);
//!
//! let cached_repo = CachedMovieRepository::new(repo, CacheAside::new(cache));
//! ```

mod movies;

pub use movies::{policies, CachedMovieRepository};
