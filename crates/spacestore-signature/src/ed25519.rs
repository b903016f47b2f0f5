//! Ed25519 signer with a `did:key` verification-method id

use crate::error::SignatureError;
use crate::signer::Signer;
use async_trait::async_trait;
use base58::ToBase58;
use ed25519_dalek::{Signer as _, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

// multicodec ed25519-pub, varint encoded
const MULTICODEC_ED25519_PUB: [u8; 2] = [0xed, 0x01];

/// An Ed25519 [`Signer`] backed by ed25519-dalek
///
/// Its id is a `did:key` verification-method URI of the form
/// `did:key:z{mb}#z{mb}`, where `z{mb}` is the base58btc multibase of the
/// multicodec-prefixed public key.
///
/// # Example
///
/// ```rust
/// use spacestore_signature::{Ed25519Signer, Signer};
///
/// let signer = Ed25519Signer::generate();
/// assert!(signer.id().starts_with("did:key:z"));
/// ```
pub struct Ed25519Signer {
    signing_key: SigningKey,
    id: String,
}

impl Ed25519Signer {
    /// Generate a signer from a fresh random key
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Build a signer from a 32-byte seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let multibase = multibase_of(&signing_key.verifying_key());
        let id = format!("did:key:{}#{}", multibase, multibase);
        Self { signing_key, id }
    }

    /// The controller DID (the `did:key:` prefix of the id)
    pub fn did(&self) -> &str {
        // the id is always "{did}#{fragment}"
        self.id.split('#').next().unwrap_or(&self.id)
    }

    /// Public key for verifying signatures produced by this signer
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

#[async_trait]
impl Signer for Ed25519Signer {
    fn id(&self) -> &str {
        &self.id
    }

    async fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignatureError> {
        let signature = self.signing_key.sign(data);
        Ok(signature.to_bytes().to_vec())
    }
}

/// base58btc multibase of the multicodec-prefixed public key
fn multibase_of(key: &VerifyingKey) -> String {
    let mut prefixed = Vec::with_capacity(2 + 32);
    prefixed.extend_from_slice(&MULTICODEC_ED25519_PUB);
    prefixed.extend_from_slice(key.as_bytes());
    format!("z{}", prefixed.to_base58())
}
