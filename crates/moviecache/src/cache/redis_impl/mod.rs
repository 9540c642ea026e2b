//! Redis cache backend implementation.
//!
//! Provides a shared cache for multi-instance deployments. Connections are
//! multiplexed through `redis::aio::ConnectionManager`, which is safe to clone
//! into every concurrent caller.

mod cache;
mod error;

pub use cache::RedisCache;
