//! In-memory cache implementation with LRU eviction.
//!
//! Expiry is lazy: an expired entry is dropped the next time it is read,
//! counted or matched by a pattern delete. Time comes from
//! `tokio::time::Instant`, so tests can fast-forward TTLs with a paused clock.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use tokio::time::Instant;

use moviecache_core::cache::{pattern_matches, Cache, CacheError, Result};

/// A single cache entry and its expiry deadline.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// An entry is dead from its deadline on.
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Uses LRU eviction to bound memory once `max_entries` is reached.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` entries.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::OperationFailed` if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            CacheError::OperationFailed("max_entries must be greater than zero".to_string())
        })?;
        Ok(Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        })
    }

    /// Removes expired entries and returns the live keys matching `pattern`.
    async fn live_keys_matching(&self, pattern: &str) -> Vec<String> {
        let now = Instant::now();
        let mut store = self.store.write().await;

        let expired: Vec<String> = store
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            store.pop(key);
        }

        store
            .iter()
            .filter(|(key, _)| pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => {
                return Ok(Some(entry.value.clone()))
            }
            Some(_) => {}
            None => return Ok(None),
        }

        store.pop(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut store = self.store.write().await;
        let now = Instant::now();
        Ok(store
            .pop(key)
            .is_some_and(|entry| !entry.is_expired(now)))
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<u64> {
        let keys = self.live_keys_matching(pattern).await;

        let mut store = self.store.write().await;
        let removed = keys.iter().filter(|key| store.pop(*key).is_some()).count();
        Ok(removed as u64)
    }

    async fn count_matching(&self, pattern: &str) -> Result<u64> {
        Ok(self.live_keys_matching(pattern).await.len() as u64)
    }

    async fn memory_used(&self) -> Result<Option<String>> {
        let store = self.store.read().await;
        let bytes: usize = store
            .iter()
            .map(|(key, entry)| key.len() + entry.value.len())
            .sum();
        Ok(Some(format_bytes(bytes)))
    }
}

/// Formats a byte count the way Redis reports `used_memory_human`.
fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["K", "M", "G", "T"];

    if bytes < 1024 {
        return format!("{bytes}B");
    }
    let mut value = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.2}{unit}")
}
