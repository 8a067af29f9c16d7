//! Domain-level error types.

use thiserror::Error;

/// Domain errors - every way a blog request can be refused.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Server misconfigured: {0}")]
    Configuration(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
