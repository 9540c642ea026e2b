//! Redis error mapping to CacheError.

use moviecache_core::cache::CacheError;
use redis::ErrorKind;

/// Maps Redis errors to CacheError.
///
/// Refused, dropped and failed-auth connections are connection-level; every
/// other error only fails the command that produced it.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_io_error()
        || err.kind() == ErrorKind::AuthenticationFailed
    {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_is_connection_level() {
        let err = redis::RedisError::from((ErrorKind::AuthenticationFailed, "WRONGPASS"));
        assert!(map_redis_error(err).is_connection_level());
    }

    #[test]
    fn test_io_error_is_connection_level() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = redis::RedisError::from(io);
        assert!(map_redis_error(err).is_connection_level());
    }

    #[test]
    fn test_type_error_is_operation_level() {
        let err = redis::RedisError::from((ErrorKind::TypeError, "WRONGTYPE"));
        assert!(matches!(
            map_redis_error(err),
            CacheError::OperationFailed(_)
        ));
    }
}
