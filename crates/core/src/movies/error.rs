use thiserror::Error;

/// Errors that can occur during movie repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("server selection timeout".to_string());
        assert_eq!(error.to_string(), "Connection failed: server selection timeout");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("bad regex".to_string());
        assert_eq!(error.to_string(), "Query failed: bad regex");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("start year after end year".to_string());
        assert_eq!(error.to_string(), "Invalid data: start year after end year");
    }
}
