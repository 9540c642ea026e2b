mod args;
mod error;
mod keys;
mod patterns;
mod stats;
mod traits;

pub use args::{CallArgs, CaseFolding};
pub use error::{CacheError, Result};
pub use keys::{derive_key, namespace_pattern, prefix_pattern, DIGEST_HEX_LEN, KEY_NAMESPACE};
pub use patterns::{has_wildcards, pattern_matches};
pub use stats::{
    AtomicConnectionState, CacheCounters, CacheStats, ConnectionState, CounterSnapshot,
};
pub use traits::Cache;
