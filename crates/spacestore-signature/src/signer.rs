//! The injected signer capability

use crate::error::SignatureError;
use async_trait::async_trait;

/// A digital-signature capability
///
/// The client never inspects private key material; it only calls `sign`
/// and reads the public `id`. The id is used verbatim as the `keyId` of
/// rendered authorizations, so it should be a stable verification-method
/// reference a verifier can resolve (e.g. a `did:key` verification method).
#[async_trait]
pub trait Signer: Send + Sync {
    /// Verification-method id for signatures produced by this signer
    fn id(&self) -> &str;

    /// Sign the provided bytes
    async fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignatureError>;
}
