//! Redis cache implementation.
//!
//! Values are stored with `SETEX`, so expiry is entirely Redis' job. Pattern
//! operations walk the keyspace with `SCAN MATCH` instead of `KEYS` to avoid
//! blocking the server on large databases.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use moviecache_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Number of keys removed per `DEL` when clearing by pattern.
const DELETE_CHUNK: usize = 500;

/// Redis cache backend using connection manager for pooling.
#[derive(Clone)]
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://:secret@localhost:6379/0")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }

    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let mut iter = conn
            .scan_match::<_, String>(pattern)
            .await
            .map_err(map_redis_error)?;

        let mut keys = Vec::new();
        while let Some(key) = iter.next_item().await {
            keys.push(key);
        }
        Ok(keys)
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(key).await.map_err(map_redis_error)?;
        Ok(removed > 0)
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<u64> {
        let keys = self.scan_keys(pattern).await?;
        if keys.is_empty() {
            return Ok(0);
        }

        // SCAN may report a key twice; DEL counts each removal once.
        let mut conn = self.conn.clone();
        let mut removed = 0;
        for chunk in keys.chunks(DELETE_CHUNK) {
            let count: u64 = conn.del(chunk.to_vec()).await.map_err(map_redis_error)?;
            removed += count;
        }
        Ok(removed)
    }

    async fn count_matching(&self, pattern: &str) -> Result<u64> {
        let mut keys = self.scan_keys(pattern).await?;
        keys.sort_unstable();
        keys.dedup();
        Ok(keys.len() as u64)
    }

    async fn memory_used(&self) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let info: String = redis::cmd("INFO")
            .arg("memory")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(info_field(&info, "used_memory_human").map(str::to_string))
    }
}

/// Extracts `field` from the `key:value` lines of an `INFO` reply.
fn info_field<'a>(info: &'a str, field: &str) -> Option<&'a str> {
    info.lines()
        .filter_map(|line| line.trim_end().split_once(':'))
        .find(|(name, _)| *name == field)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// Helper to get Redis URL from environment.
    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Skip test if Redis not available.
    async fn get_test_cache() -> Option<RedisCache> {
        let cache = tokio::time::timeout(Duration::from_secs(2), RedisCache::new(&redis_url()))
            .await
            .ok()?
            .ok()?;
        cache.ping().await.ok()?;
        Some(cache)
    }

    /// Generate a unique test namespace to avoid conflicts.
    fn test_prefix() -> String {
        format!("test:redis_cache:{}", Uuid::new_v4())
    }

    #[test]
    fn test_info_field() {
        let info = "# Memory\r\nused_memory:1048576\r\nused_memory_human:1.00M\r\n";
        assert_eq!(info_field(info, "used_memory_human"), Some("1.00M"));
        assert_eq!(info_field(info, "used_memory"), Some("1048576"));
        assert_eq!(info_field(info, "maxmemory"), None);
    }

    #[tokio::test]
    async fn test_redis_set_and_get() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("{}:set_get", test_prefix());
        cache
            .set(&key, b"[{\"title\":\"Heat\"}]", Duration::from_secs(60))
            .await
            .unwrap();

        let result = cache.get(&key).await.unwrap();
        assert_eq!(result, Some(b"[{\"title\":\"Heat\"}]".to_vec()));

        assert!(cache.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_redis_get_nonexistent() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("{}:nonexistent", test_prefix());
        assert_eq!(cache.get(&key).await.unwrap(), None);
        assert!(!cache.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_redis_ttl() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("{}:ttl", test_prefix());
        cache
            .set(&key, b"expiring", Duration::from_secs(1))
            .await
            .unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(cache.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_delete_pattern_and_count() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let prefix = test_prefix();
        let ttl = Duration::from_secs(60);
        cache.set(&format!("{prefix}:title:1"), b"1", ttl).await.unwrap();
        cache.set(&format!("{prefix}:title:2"), b"2", ttl).await.unwrap();
        cache.set(&format!("{prefix}:genre:1"), b"3", ttl).await.unwrap();

        assert_eq!(
            cache.count_matching(&format!("{prefix}:*")).await.unwrap(),
            3
        );

        let removed = cache
            .delete_pattern(&format!("{prefix}:title:*"))
            .await
            .unwrap();
        assert_eq!(removed, 2);
        assert!(cache
            .get(&format!("{prefix}:genre:1"))
            .await
            .unwrap()
            .is_some());

        assert_eq!(
            cache.delete_pattern(&format!("{prefix}:*")).await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_redis_memory_used() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        assert!(cache.memory_used().await.unwrap().is_some());
    }
}
