//! In-memory movie collection.
//!
//! Stands in for the document database in development and tests. Movies live
//! in a `Vec` behind an `Arc<RwLock<_>>`, and every lookup is a linear scan.
//!
//! # Example
//!
//! ```rust,ignore
//! use moviecache::storage::inmemory::InMemoryMovieRepository;
//!
//! let repo = InMemoryMovieRepository::seeded();
//! let batman = repo.search_by_title("batman").await?;
//! ```

mod repository;

pub use repository::InMemoryMovieRepository;
