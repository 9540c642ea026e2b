//! Process-wide cache client with fail-open semantics.
//!
//! Every public operation is total: backend failures are logged and turned
//! into "absent", "not stored" or "nothing deleted". A connection-level
//! failure, at startup or later, disables the client for the rest of the
//! process. Timeouts and command errors only fail the call that hit them.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moviecache_core::cache::{
    has_wildcards, namespace_pattern, AtomicConnectionState, Cache, CacheCounters, CacheError,
    CacheStats, ConnectionState, CounterSnapshot, Result,
};

use crate::config::{CacheBackendKind, CacheConfig};

use super::{MemoryCache, RedisCache};

/// Shared handle to the cache backend plus its connection state and counters.
///
/// Built once by the composition root and shared as `Arc<CacheClient>`.
pub struct CacheClient {
    backend: Option<Arc<dyn Cache>>,
    state: AtomicConnectionState,
    counters: CacheCounters,
    timeout: Duration,
}

impl CacheClient {
    /// Handshakes with `backend` and returns a connected or disabled client.
    pub async fn connect(backend: Arc<dyn Cache>, timeout: Duration) -> Self {
        let client = Self {
            backend: Some(backend.clone()),
            state: AtomicConnectionState::new(ConnectionState::Uninitialized),
            counters: CacheCounters::new(),
            timeout,
        };

        match tokio::time::timeout(timeout, backend.ping()).await {
            Ok(Ok(())) => {
                client.state.mark_connected();
                tracing::info!("Cache connected");
            }
            Ok(Err(err)) => {
                client.state.disable();
                tracing::warn!(error = %err, "Cache handshake failed, caching disabled");
            }
            Err(_) => {
                client.state.disable();
                tracing::warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    "Cache handshake timed out, caching disabled"
                );
            }
        }

        client
    }

    /// Opens a Redis connection described by `config`.
    ///
    /// Never fails: an unreachable or misconfigured server yields a disabled client.
    pub async fn connect_redis(config: &CacheConfig) -> Self {
        let timeout = config.timeout();
        match tokio::time::timeout(timeout, RedisCache::new(&config.redis_url())).await {
            Ok(Ok(cache)) => {
                tracing::debug!(host = %config.host, port = config.port, db = config.db, "Redis client opened");
                Self::connect(Arc::new(cache), timeout).await
            }
            Ok(Err(err)) => {
                tracing::warn!(
                    host = %config.host,
                    port = config.port,
                    error = %err,
                    "Redis connection failed, caching disabled"
                );
                Self::disabled_with_timeout(timeout)
            }
            Err(_) => {
                tracing::warn!(
                    host = %config.host,
                    port = config.port,
                    timeout_ms = timeout.as_millis() as u64,
                    "Redis connection timed out, caching disabled"
                );
                Self::disabled_with_timeout(timeout)
            }
        }
    }

    /// Builds the backend selected by `config`.
    pub async fn from_config(config: &CacheConfig) -> Self {
        match config.backend {
            CacheBackendKind::Redis => Self::connect_redis(config).await,
            CacheBackendKind::Memory => match MemoryCache::new(config.max_entries) {
                Ok(cache) => Self::connect(Arc::new(cache), config.timeout()).await,
                Err(err) => {
                    tracing::warn!(error = %err, "Memory cache unavailable, caching disabled");
                    Self::disabled_with_timeout(config.timeout())
                }
            },
            CacheBackendKind::Disabled => {
                tracing::info!("Caching disabled by configuration");
                Self::disabled()
            }
        }
    }

    /// A client that never caches.
    pub fn disabled() -> Self {
        Self::disabled_with_timeout(Duration::ZERO)
    }

    fn disabled_with_timeout(timeout: Duration) -> Self {
        Self {
            backend: None,
            state: AtomicConnectionState::new(ConnectionState::Disabled),
            counters: CacheCounters::new(),
            timeout,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.load()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// Stops using the backend. The client stays disabled afterwards.
    pub fn disconnect(&self) {
        if self.state.disable() {
            tracing::info!("Cache disconnected");
        }
    }

    pub fn record_hit(&self) {
        self.counters.record_hit();
    }

    pub fn record_miss(&self) {
        self.counters.record_miss();
    }

    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    /// Returns the stored bytes for `key`, or `None` if absent, expired or unreachable.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let backend = self.backend()?;
        self.guarded("get", backend.get(key)).await.ok().flatten()
    }

    /// Stores `value` under `key` for `ttl`. Returns whether the value was stored.
    pub async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> bool {
        let Some(backend) = self.backend() else {
            return false;
        };
        self.guarded("set", backend.set(key, value, ttl))
            .await
            .is_ok()
    }

    /// Removes a single key. Returns whether a value was removed.
    pub async fn delete(&self, key: &str) -> bool {
        let Some(backend) = self.backend() else {
            return false;
        };
        self.guarded("delete", backend.delete(key))
            .await
            .unwrap_or(false)
    }

    /// Removes every key matching the glob `pattern`. Returns the number removed.
    ///
    /// A pattern without wildcards is a plain key and is removed directly.
    pub async fn delete_matching(&self, pattern: &str) -> u64 {
        let Some(backend) = self.backend() else {
            return 0;
        };
        let removed = if has_wildcards(pattern) {
            self.guarded("delete_pattern", backend.delete_pattern(pattern))
                .await
                .unwrap_or(0)
        } else {
            u64::from(self.delete(pattern).await)
        };
        if removed > 0 {
            tracing::info!(pattern, removed, "Cleared cache entries");
        }
        removed
    }

    /// Observability snapshot. Never fails.
    pub async fn stats(&self) -> CacheStats {
        let counters = self.counters();
        let Some(backend) = self.backend() else {
            return CacheStats::disabled(counters);
        };

        let pattern = namespace_pattern();
        let keys = self
            .guarded("count_matching", backend.count_matching(&pattern))
            .await;
        let memory = self.guarded("memory_used", backend.memory_used()).await;

        match (keys, memory) {
            (Ok(keys_count), Ok(memory_used)) => {
                CacheStats::connected(keys_count, memory_used, counters)
            }
            (Err(err), _) | (_, Err(err)) => CacheStats::unreachable(err.to_string(), counters),
        }
    }

    fn backend(&self) -> Option<&Arc<dyn Cache>> {
        if self.is_connected() {
            self.backend.as_ref()
        } else {
            None
        }
    }

    /// Runs a backend call under the configured timeout and records failures.
    async fn guarded<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let result = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::Timeout(self.timeout)),
        };

        if let Err(err) = &result {
            self.on_failure(operation, err);
        }
        result
    }

    fn on_failure(&self, operation: &'static str, err: &CacheError) {
        if err.is_connection_level() {
            if self.state.disable() {
                tracing::warn!(
                    operation,
                    error = %err,
                    "Cache connection lost, caching disabled"
                );
            }
        } else {
            tracing::warn!(operation, error = %err, "Cache operation failed");
        }
    }
}
