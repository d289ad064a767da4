//! Error types for the taller-db crate.
//!
//! Provides a unified error type that wraps `SQLx` errors with additional context.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to establish or acquire a database connection.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A database query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// A unique constraint was violated.
    ///
    /// The service layer checks uniqueness before writing, but concurrent
    /// requests can still race; the constraint is the backstop.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DbError {
    /// Classify a query error, surfacing unique-constraint violations.
    #[must_use]
    pub fn from_query(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return DbError::UniqueViolation(constraint);
            }
        }
        DbError::QueryFailed(err)
    }

    /// Check if this error indicates a connection problem.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_))
    }

    /// Check if this error indicates a unique-constraint violation.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation(_))
    }

    /// Check if this error indicates a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DbError::NotFound("cliente".to_string());
        assert_eq!(err.to_string(), "Not found: cliente");

        let err = DbError::UniqueViolation("clientes_taller_cedula_key".to_string());
        assert!(err.to_string().contains("clientes_taller_cedula_key"));
    }

    #[test]
    fn test_is_unique_violation() {
        assert!(DbError::UniqueViolation("x".to_string()).is_unique_violation());
        assert!(!DbError::NotFound("x".to_string()).is_unique_violation());
    }

    #[test]
    fn test_from_query_passes_through_non_db_errors() {
        let err = DbError::from_query(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::QueryFailed(_)));
    }
}
