//! Error types for the payment record service.

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The store call itself failed: network, throttling, permissions, missing table.
    #[error("Database error: {0}")]
    Database(String),

    /// An item came back that cannot be read as a payment record.
    #[error("Malformed item: {0}")]
    Malformed(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        // Every store failure is one kind to callers: the operation failed.
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_errors_become_internal() {
        let err: AppError = RepoError::Database("throttled".into()).into();
        assert!(matches!(err, AppError::Internal(msg) if msg.contains("throttled")));

        let err: AppError = RepoError::Malformed("price".into()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
