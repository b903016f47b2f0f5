//! Error types for spacestore addressing and shapes

use thiserror::Error;

/// Errors raised while parsing space identifiers and storage paths
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("expected a urn:uuid URI, got: {0}")]
    NotAUrnUuid(String),

    #[error("unable to parse uuid from {0}")]
    MissingUuid(String),

    #[error("unable to parse space path from resource path: {0}")]
    MissingSpacePath(String),
}

/// Errors raised when a collection body does not match the expected shape
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("collection body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected collection type \"Collection\", got {0:?}")]
    NotACollection(String),
}
