use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CacheError {
    /// Returns true when the error means the backend itself is unusable.
    ///
    /// Connection-level failures disable the cache client for the rest of the
    /// process. Timeouts, command errors and serialization errors only affect
    /// the single call that produced them.
    pub fn is_connection_level(&self) -> bool {
        matches!(self, CacheError::ConnectionFailed(_))
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
