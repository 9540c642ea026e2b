use std::{env, fmt, str::FromStr, time::Duration};

use thiserror::Error;

/// Which cache backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackendKind {
    Redis,
    Memory,
    Disabled,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown cache backend '{0}', expected 'redis', 'memory' or 'disabled'")]
pub struct UnknownCacheBackend(String);

impl FromStr for CacheBackendKind {
    type Err = UnknownCacheBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            "disabled" | "none" | "off" => Ok(Self::Disabled),
            _ => Err(UnknownCacheBackend(s.to_string())),
        }
    }
}

impl fmt::Display for CacheBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Redis => "redis",
            Self::Memory => "memory",
            Self::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// Cache configuration loaded from environment variables.
#[derive(Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Backend selection (default: redis)
    pub backend: CacheBackendKind,
    /// Redis host (default: "127.0.0.1")
    pub host: String,
    /// Redis port (default: 6379)
    pub port: u16,
    /// Redis password. `None` means an unauthenticated connection.
    pub password: Option<String>,
    /// Redis logical database index (default: 0)
    pub db: i64,
    /// Connect, read and write timeout in seconds (default: 5)
    pub timeout_secs: u64,
    /// Maximum entries held by the memory backend (default: 10,000)
    pub max_entries: usize,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_BACKEND` - `redis`, `memory` or `disabled` (default: redis)
    /// - `REDIS_HOST` - Redis host (default: "127.0.0.1")
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `REDIS_PASSWORD` - Redis password (default: unset; empty counts as unset)
    /// - `REDIS_DB` - Redis database index (default: 0)
    /// - `CACHE_TIMEOUT_SECS` - Cache I/O timeout (default: 5)
    /// - `CACHE_MAX_ENTRIES` - Memory backend capacity (default: 10,000)
    pub fn from_env() -> Self {
        let backend = match env::var("CACHE_BACKEND") {
            Ok(value) => value.parse().unwrap_or_else(|err: UnknownCacheBackend| {
                tracing::warn!(error = %err, "Falling back to the redis cache backend");
                CacheBackendKind::Redis
            }),
            Err(_) => CacheBackendKind::Redis,
        };

        Self {
            backend,
            host: env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("REDIS_PORT").unwrap_or(6379),
            password: env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty()),
            db: parse_var("REDIS_DB").unwrap_or(0),
            timeout_secs: parse_var("CACHE_TIMEOUT_SECS").unwrap_or(5),
            max_entries: parse_var("CACHE_MAX_ENTRIES").unwrap_or(10_000),
        }
    }

    /// Get the cache I/O timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the Redis connection URL, percent-encoding the password.
    pub fn redis_url(&self) -> String {
        match &self.password {
            Some(password) => format!(
                "redis://:{}@{}:{}/{}",
                urlencoding::encode(password),
                self.host,
                self.port,
                self.db
            ),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackendKind::Redis,
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: None,
            db: 0,
            timeout_secs: 5,
            max_entries: 10_000,
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("backend", &self.backend)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("db", &self.db)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_entries", &self.max_entries)
            .finish()
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_conversion() {
        let config = CacheConfig {
            timeout_secs: 2,
            ..CacheConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_redis_url_without_password() {
        let config = CacheConfig {
            host: "cache.internal".to_string(),
            port: 6380,
            db: 3,
            ..CacheConfig::default()
        };
        assert_eq!(config.redis_url(), "redis://cache.internal:6380/3");
    }

    #[test]
    fn test_redis_url_encodes_password() {
        let config = CacheConfig {
            password: Some("p@ss:w/rd".to_string()),
            ..CacheConfig::default()
        };
        assert_eq!(
            config.redis_url(),
            "redis://:p%40ss%3Aw%2Frd@127.0.0.1:6379/0"
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let config = CacheConfig {
            password: Some("hunter2".to_string()),
            ..CacheConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("redis".parse::<CacheBackendKind>(), Ok(CacheBackendKind::Redis));
        assert_eq!(" Memory ".parse::<CacheBackendKind>(), Ok(CacheBackendKind::Memory));
        assert_eq!("off".parse::<CacheBackendKind>(), Ok(CacheBackendKind::Disabled));
        assert!("memcached".parse::<CacheBackendKind>().is_err());
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        for name in [
            "CACHE_BACKEND",
            "REDIS_HOST",
            "REDIS_PORT",
            "REDIS_PASSWORD",
            "REDIS_DB",
            "CACHE_TIMEOUT_SECS",
            "CACHE_MAX_ENTRIES",
        ] {
            env::remove_var(name);
        }

        let config = CacheConfig::from_env();

        assert_eq!(config, CacheConfig::default());
    }
}
