//! # spacestore-signature
//!
//! HTTP Signature authorization construction for the spacestore storage
//! protocol.
//!
//! This crate provides:
//! - The [`Signer`] capability trait injected by callers
//! - Canonical signature-base construction over a fixed set of covered
//!   components
//! - `Authorization: Signature ...` header rendering and parsing
//! - A concrete [`Ed25519Signer`] identified by a `did:key` verification
//!   method
//!
//! ## Example
//!
//! ```rust
//! use spacestore_signature::{create_authorization, Ed25519Signer, DEFAULT_VALIDITY};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), spacestore_signature::SignatureError> {
//! let signer = Ed25519Signer::generate();
//! let authorization =
//!     create_authorization(&signer, "GET", "/space/abc/notes", DEFAULT_VALIDITY).await?;
//! assert!(authorization.starts_with("Signature keyId=\"did:key:"));
//! # Ok(())
//! # }
//! ```

pub mod authorization;
pub mod canonical;
pub mod did;
pub mod ed25519;
pub mod error;
pub mod signer;

pub use authorization::{create_authorization, Authorization, DEFAULT_VALIDITY};
pub use canonical::{request_target, signature_base, SignatureInput, COVERED_COMPONENTS};
pub use did::{controller_of_verification_method, is_did_key};
pub use ed25519::Ed25519Signer;
pub use error::SignatureError;
pub use signer::Signer;
