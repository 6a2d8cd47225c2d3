//! Error types and result handling for customer operations.
//!
//! Defines a tagged taxonomy so callers can distinguish a violated field
//! constraint from a missing row from a backend failure. The HTTP layer
//! maps each variant to its own status code.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for customer directory operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field constraint was violated before persistence.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No customer row exists for the given id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound("requested customer not found".to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = CoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn pool_errors_map_to_database() {
        let err = CoreError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, CoreError::Database(_)));
    }

    #[test]
    fn display_includes_constraint_message() {
        let err = CoreError::Validation("first_name must be at least 3 characters".to_string());
        assert_eq!(err.to_string(), "Validation error: first_name must be at least 3 characters");
    }
}
