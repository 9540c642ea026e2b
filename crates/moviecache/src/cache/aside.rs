//! Cache-aside wrapper for read operations.
//!
//! [`CacheAside::get_or_compute`] derives a key from a [`CachePolicy`] and the
//! call's arguments, serves the stored value when there is one and otherwise
//! runs the operation and stores its result. The operation's own errors pass
//! through untouched and are never cached.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use moviecache_core::cache::{derive_key, CallArgs, CaseFolding, Result as CacheResult};

use super::CacheClient;

/// How one operation is cached: its key prefix, TTL and argument folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub prefix: &'static str,
    pub ttl: Duration,
    pub case_folding: CaseFolding,
}

impl CachePolicy {
    /// A policy that keeps string arguments as given.
    pub const fn new(prefix: &'static str, ttl_secs: u64) -> Self {
        Self {
            prefix,
            ttl: Duration::from_secs(ttl_secs),
            case_folding: CaseFolding::Preserve,
        }
    }

    /// Same policy with string arguments lowercased before hashing.
    pub const fn folding_case(self) -> Self {
        Self {
            case_folding: CaseFolding::Fold,
            ..self
        }
    }

    /// Derives the key for a call with `args`.
    pub fn key(&self, args: &CallArgs) -> String {
        derive_key(self.prefix, args, self.case_folding)
    }
}

/// Read-through helper shared by every cached operation.
#[derive(Clone)]
pub struct CacheAside {
    client: Arc<CacheClient>,
}

impl CacheAside {
    pub fn new(client: Arc<CacheClient>) -> Self {
        Self { client }
    }

    /// Returns the cached result of a call, computing and storing it on a miss.
    ///
    /// `args` is the canonicalizable identity of the call; if it could not be
    /// built the cache is bypassed for this call. Errors from `compute` are
    /// returned unchanged and nothing is stored for them.
    pub async fn get_or_compute<T, E, F, Fut>(
        &self,
        policy: &CachePolicy,
        args: CacheResult<CallArgs>,
        compute: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let args = match args {
            Ok(args) => args,
            Err(err) => {
                tracing::warn!(prefix = policy.prefix, error = %err, "Uncacheable arguments, bypassing cache");
                return compute().await;
            }
        };
        let key = policy.key(&args);

        if let Some(bytes) = self.client.get(&key).await {
            match serde_json::from_slice::<T>(&bytes) {
                Ok(value) => {
                    self.client.record_hit();
                    tracing::debug!(key = %key, "Cache hit");
                    return Ok(value);
                }
                // Stale or foreign payload, recompute and overwrite it
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Cached value could not be decoded");
                }
            }
        }

        self.client.record_miss();
        tracing::debug!(key = %key, "Cache miss");

        let value = compute().await?;

        match serde_json::to_vec(&value) {
            Ok(bytes) => {
                if self.client.set(&key, &bytes, policy.ttl).await {
                    tracing::debug!(key = %key, ttl_secs = policy.ttl.as_secs(), "Cache store");
                }
            }
            Err(err) => {
                tracing::error!(key = %key, error = %err, "Failed to serialize value for cache");
            }
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde::{Deserialize, Serializer};

    use moviecache_core::cache::{namespace_pattern, Cache, CacheError};

    use super::super::client::tests::ScriptedCache;
    use super::super::MemoryCache;

    const TIMEOUT: Duration = Duration::from_secs(5);
    const LOOKUP: CachePolicy = CachePolicy::new("lookup", 60);

    #[derive(Debug, PartialEq, Eq)]
    struct LookupFailed(&'static str);

    async fn memory_aside() -> (CacheAside, Arc<MemoryCache>) {
        let store = Arc::new(MemoryCache::new(100).unwrap());
        let client = CacheClient::connect(store.clone(), TIMEOUT).await;
        (CacheAside::new(Arc::new(client)), store)
    }

    fn counters(aside: &CacheAside) -> (u64, u64) {
        let snapshot = aside.client.counters();
        (snapshot.hits, snapshot.misses)
    }

    fn args(value: &str) -> CacheResult<CallArgs> {
        CallArgs::new().arg(value)
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let (aside, _) = memory_aside().await;
        let runs = AtomicUsize::new(0);

        for _ in 0..2 {
            let value: Result<Vec<u32>, LookupFailed> = aside
                .get_or_compute(&LOOKUP, args("a"), || async {
                    runs.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2, 3])
                })
                .await;
            assert_eq!(value, Ok(vec![1, 2, 3]));
        }

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(counters(&aside), (1, 1));
    }

    #[tokio::test]
    async fn test_different_arguments_are_cached_separately() {
        let (aside, store) = memory_aside().await;

        let a: Result<String, LookupFailed> = aside
            .get_or_compute(&LOOKUP, args("a"), || async { Ok("A".to_string()) })
            .await;
        let b: Result<String, LookupFailed> = aside
            .get_or_compute(&LOOKUP, args("b"), || async { Ok("B".to_string()) })
            .await;

        assert_eq!(a, Ok("A".to_string()));
        assert_eq!(b, Ok("B".to_string()));
        assert_eq!(store.count_matching("movie_cache:lookup:*").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_case_folding_policy_shares_entries() {
        let (aside, _) = memory_aside().await;
        let policy = LOOKUP.folding_case();
        let runs = AtomicUsize::new(0);

        for title in ["Batman", "batman", "BATMAN", " batman"] {
            let _: Result<u8, LookupFailed> = aside
                .get_or_compute(&policy, args(title), || async {
                    runs.fetch_add(1, Ordering::SeqCst);
                    Ok(1)
                })
                .await;
        }

        // Padding is part of the query, so " batman" gets its own entry
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_pass_through_and_are_not_cached() {
        let (aside, store) = memory_aside().await;

        let result: Result<Vec<u32>, LookupFailed> = aside
            .get_or_compute(&LOOKUP, args("boom"), || async {
                Err(LookupFailed("database down"))
            })
            .await;

        assert_eq!(result, Err(LookupFailed("database down")));
        assert_eq!(store.count_matching(&namespace_pattern()).await.unwrap(), 0);

        // The next call runs the operation again
        let result: Result<Vec<u32>, LookupFailed> = aside
            .get_or_compute(&LOOKUP, args("boom"), || async { Ok(vec![7]) })
            .await;
        assert_eq!(result, Ok(vec![7]));
    }

    #[tokio::test]
    async fn test_disabled_cache_falls_through() {
        let backend = Arc::new(ScriptedCache {
            fail_ping: true,
            ..Default::default()
        });
        let client = CacheClient::connect(backend.clone(), TIMEOUT).await;
        let aside = CacheAside::new(Arc::new(client));
        let runs = AtomicUsize::new(0);

        for _ in 0..3 {
            let value: Result<String, LookupFailed> = aside
                .get_or_compute(&LOOKUP, args("a"), || async {
                    runs.fetch_add(1, Ordering::SeqCst);
                    Ok("fresh".to_string())
                })
                .await;
            assert_eq!(value, Ok("fresh".to_string()));
        }

        assert_eq!(runs.load(Ordering::SeqCst), 3);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_recomputed() {
        let (aside, store) = memory_aside().await;
        let key = LOOKUP.key(&args("a").unwrap());
        store
            .set(&key, b"not json", Duration::from_secs(60))
            .await
            .unwrap();

        let value: Result<Vec<u32>, LookupFailed> = aside
            .get_or_compute(&LOOKUP, args("a"), || async { Ok(vec![4]) })
            .await;

        assert_eq!(value, Ok(vec![4]));
        assert_eq!(store.get(&key).await.unwrap(), Some(b"[4]".to_vec()));
        assert_eq!(counters(&aside), (0, 1));
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Unserializable(u8);

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[tokio::test]
    async fn test_serialization_failure_still_returns_value() {
        let (aside, store) = memory_aside().await;

        let value: Result<Unserializable, LookupFailed> = aside
            .get_or_compute(&LOOKUP, args("a"), || async { Ok(Unserializable(9)) })
            .await;

        assert_eq!(value, Ok(Unserializable(9)));
        assert_eq!(store.count_matching(&namespace_pattern()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_bad_arguments_bypass_cache() {
        let (aside, store) = memory_aside().await;
        let bad_args: CacheResult<CallArgs> =
            Err(CacheError::Serialization("key must be a string".to_string()));

        let value: Result<u8, LookupFailed> = aside
            .get_or_compute(&LOOKUP, bad_args, || async { Ok(3) })
            .await;

        assert_eq!(value, Ok(3));
        assert_eq!(store.count_matching(&namespace_pattern()).await.unwrap(), 0);
        assert_eq!(counters(&aside), (0, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_with_policy_ttl() {
        let (aside, _) = memory_aside().await;
        let runs = AtomicUsize::new(0);

        let call = || {
            aside.get_or_compute(&LOOKUP, args("a"), || async {
                runs.fetch_add(1, Ordering::SeqCst);
                Ok::<_, LookupFailed>(1u8)
            })
        };

        call().await.unwrap();
        tokio::time::advance(Duration::from_secs(59)).await;
        call().await.unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        call().await.unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
