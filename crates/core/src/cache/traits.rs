use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for key-value cache backends with expiring entries.
///
/// Implementations report every failure as a [`super::CacheError`]. Deciding
/// whether a failure is fatal for the cache is left to the caller.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Verifies the backend is reachable.
    async fn ping(&self) -> Result<()>;

    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache, expiring after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;

    /// Deletes a value from the cache by key. Returns whether a value was removed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Deletes all values matching a glob pattern (e.g., "movie_cache:title:*").
    async fn delete_pattern(&self, pattern: &str) -> Result<u64>;

    /// Counts the live keys matching a glob pattern.
    async fn count_matching(&self, pattern: &str) -> Result<u64>;

    /// Human-readable memory usage, when the backend can report it.
    async fn memory_used(&self) -> Result<Option<String>>;
}
