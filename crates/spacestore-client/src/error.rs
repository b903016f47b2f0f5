//! Error types for client operations

use crate::response::StorageResponse;
use spacestore_core::{AddressError, ShapeError};
use spacestore_signature::SignatureError;
use thiserror::Error;

/// Errors surfaced by storage client operations
///
/// No operation retries on failure; every error carries its cause or the
/// offending response. Resource and space operations return non-2xx
/// statuses as plain [`StorageResponse`]s for the caller to branch on;
/// the typed `NotFound`/`Unauthorized`/`FetchFailed` variants are raised
/// by collection iteration, which must interpret the status itself.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    #[error("signature error: {0}")]
    Signature(#[from] SignatureError),

    #[error("collection shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("collection not found")]
    NotFound(StorageResponse),

    #[error("unauthorized")]
    Unauthorized(StorageResponse),

    #[error("request failed with status {}", .0.status())]
    FetchFailed(StorageResponse),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
