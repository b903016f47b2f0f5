//! Syntactic helpers for `did:key` URIs
//!
//! No DID resolution happens here; a `did:key` verification method is
//! self-describing, so its controller is just a parsed prefix of the
//! verification-method id.

use crate::error::SignatureError;

/// Check whether the value is a `did:key` DID (syntactically)
pub fn is_did_key(s: &str) -> bool {
    match s.strip_prefix("did:key:") {
        Some(rest) => !rest.is_empty() && !rest.contains(':') && !rest.contains('#'),
        None => false,
    }
}

/// Extract the controller DID of a `did:key` verification-method id
///
/// A verification method like `did:key:zAbc#zAbc` is controlled by the DID
/// before the `#`.
///
/// # Errors
///
/// Returns an error when the prefix before `#` is not a `did:key` DID.
pub fn controller_of_verification_method(
    verification_method: &str,
) -> Result<&str, SignatureError> {
    let did = verification_method
        .split('#')
        .next()
        .unwrap_or(verification_method);
    if !is_did_key(did) {
        return Err(SignatureError::NotDidKey(verification_method.to_string()));
    }
    Ok(did)
}
