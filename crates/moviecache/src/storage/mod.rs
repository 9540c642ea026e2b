//! Movie repository implementations.
//!
//! - `inmemory`: the seeded sample collection
//! - `cached`: cache-aside decorator over any [`moviecache_core::movies::MovieRepository`]

pub mod cached;
pub mod inmemory;

pub use cached::CachedMovieRepository;
pub use inmemory::InMemoryMovieRepository;
