//! Error types for signature construction

use thiserror::Error;

/// Errors raised while building or parsing HTTP Signature authorizations
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The signer capability itself failed; this aborts the request
    /// instead of downgrading it to an unsigned one.
    #[error("signer failed: {0}")]
    SignerFailed(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("not a did:key verification method: {0}")]
    NotDidKey(String),

    #[error("malformed Signature authorization: {0}")]
    MalformedAuthorization(String),
}
