//! Connection state, hit/miss counters and the observability snapshot.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use serde::Serialize;

/// Lifecycle of the process-wide cache connection.
///
/// `Disabled` is terminal: once a client is disabled it stays disabled until
/// the process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Uninitialized,
    Connected,
    Disabled,
}

impl ConnectionState {
    fn as_u8(self) -> u8 {
        match self {
            ConnectionState::Uninitialized => 0,
            ConnectionState::Connected => 1,
            ConnectionState::Disabled => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectionState::Uninitialized,
            1 => ConnectionState::Connected,
            _ => ConnectionState::Disabled,
        }
    }
}

/// Lock-free cell holding a [`ConnectionState`].
#[derive(Debug)]
pub struct AtomicConnectionState(AtomicU8);

impl AtomicConnectionState {
    pub fn new(state: ConnectionState) -> Self {
        Self(AtomicU8::new(state.as_u8()))
    }

    pub fn load(&self) -> ConnectionState {
        ConnectionState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Moves to `Connected` unless the state is already `Disabled`.
    ///
    /// Returns the resulting state.
    pub fn mark_connected(&self) -> ConnectionState {
        let result = self.0.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
            (current != ConnectionState::Disabled.as_u8())
                .then_some(ConnectionState::Connected.as_u8())
        });
        match result {
            Ok(_) => ConnectionState::Connected,
            Err(current) => ConnectionState::from_u8(current),
        }
    }

    /// Moves to `Disabled`. Returns true if this call made the transition.
    pub fn disable(&self) -> bool {
        self.0.swap(ConnectionState::Disabled.as_u8(), Ordering::AcqRel)
            != ConnectionState::Disabled.as_u8()
    }
}

/// Process-lifetime hit and miss counters.
#[derive(Debug, Default)]
pub struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Point-in-time copy of [`CacheCounters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterSnapshot {
    pub hits: u64,
    pub misses: u64,
}

impl CounterSnapshot {
    /// Hit rate as a percentage rounded to two decimals. `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        let rate = self.hits as f64 / total as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    }
}

impl CacheCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Read-only cache snapshot served by the stats and health endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub connected: bool,
    pub keys_count: u64,
    pub memory_used: Option<String>,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CacheStats {
    /// Snapshot of a healthy backend.
    pub fn connected(
        keys_count: u64,
        memory_used: Option<String>,
        counters: CounterSnapshot,
    ) -> Self {
        Self {
            enabled: true,
            connected: true,
            keys_count,
            memory_used,
            hits: counters.hits,
            misses: counters.misses,
            hit_rate: counters.hit_rate(),
            error: None,
        }
    }

    /// Snapshot of an enabled client whose backend failed to answer.
    pub fn unreachable(error: impl Into<String>, counters: CounterSnapshot) -> Self {
        Self {
            enabled: true,
            connected: false,
            keys_count: 0,
            memory_used: None,
            hits: counters.hits,
            misses: counters.misses,
            hit_rate: counters.hit_rate(),
            error: Some(error.into()),
        }
    }

    /// Snapshot of a disabled client.
    pub fn disabled(counters: CounterSnapshot) -> Self {
        Self {
            enabled: false,
            connected: false,
            keys_count: 0,
            memory_used: None,
            hits: counters.hits,
            misses: counters.misses,
            hit_rate: counters.hit_rate(),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_without_lookups_is_zero() {
        assert_eq!(CounterSnapshot::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_is_rounded_percentage() {
        let snapshot = CounterSnapshot { hits: 1, misses: 2 };
        assert_eq!(snapshot.hit_rate(), 33.33);

        let snapshot = CounterSnapshot { hits: 3, misses: 1 };
        assert_eq!(snapshot.hit_rate(), 75.0);
    }

    #[test]
    fn test_counters_accumulate() {
        let counters = CacheCounters::new();
        counters.record_miss();
        counters.record_hit();
        counters.record_hit();
        assert_eq!(counters.snapshot(), CounterSnapshot { hits: 2, misses: 1 });
    }

    #[test]
    fn test_disabled_state_is_terminal() {
        let state = AtomicConnectionState::new(ConnectionState::Uninitialized);
        assert_eq!(state.mark_connected(), ConnectionState::Connected);

        assert!(state.disable());
        assert!(!state.disable());
        assert_eq!(state.mark_connected(), ConnectionState::Disabled);
        assert_eq!(state.load(), ConnectionState::Disabled);
    }

    #[test]
    fn test_disabled_stats_serialization() {
        let stats = CacheStats::disabled(CounterSnapshot { hits: 0, misses: 4 });
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["enabled"], false);
        assert_eq!(json["connected"], false);
        assert_eq!(json["misses"], 4);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_unreachable_stats_carry_error() {
        let stats = CacheStats::unreachable("timed out", CounterSnapshot::default());
        assert!(stats.enabled);
        assert!(!stats.connected);
        assert_eq!(stats.error.as_deref(), Some("timed out"));
    }
}
