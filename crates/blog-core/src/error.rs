//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found: {slug}")]
    NotFound {
        entity_type: &'static str,
        slug: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Not configured: {0}")]
    Misconfigured(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("Upstream failure: {0}")]
    Upstream(#[from] GeneratorError),
}

/// Post store errors. Only writes can fail; reads degrade to an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Write failed: {0}")]
    Write(String),
}

/// Text generation errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}
