//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::ValidationReport;

/// Domain errors - the ways a post operation can fail.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    #[error(transparent)]
    Store(#[from] RepoError),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Cast to document failed: {0}")]
    Cast(String),
}
