use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backend failed: connectivity, serialization, timeouts or rejected writes.
    #[error("storage error: {0}")]
    Storage(String),
    /// The requested auction does not exist.
    #[error("auction not found")]
    NotFound,
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            err => RepositoryError::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RepositoryError;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert_eq!(
            RepositoryError::from(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        );
    }

    #[test]
    fn test_backend_failures_map_to_storage() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Storage(_)));
        assert!(err.to_string().starts_with("storage error: "));
    }
}
