//! Cache backends, the process-wide cache client and the cache-aside decorator.
//!
//! The backends implement [`moviecache_core::cache::Cache`] and report every
//! failure. [`CacheClient`] owns the connection state and turns those failures
//! into misses and no-ops; [`CacheAside`] builds the read-through behavior on
//! top of it.
//!
//! - `memory`: in-process LRU store with TTLs, used for development and tests
//! - `redis_impl`: Redis store through a multiplexed connection manager

mod aside;
mod client;
pub mod memory;
pub mod redis_impl;

pub use aside::{CacheAside, CachePolicy};
pub use client::CacheClient;
pub use memory::MemoryCache;
pub use redis_impl::RedisCache;
