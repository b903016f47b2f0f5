//! Canonical signature-base construction
//!
//! The signature base is the exact byte string the signer signs and a
//! verifier recomputes. It covers a fixed, ordered set of pseudo-header
//! components; request headers beyond these never enter the base, and
//! neither does the target authority, so signatures stay valid across
//! hosts unless a caller deliberately binds them.

/// Covered components, always in this order
pub const COVERED_COMPONENTS: [&str; 4] =
    ["(created)", "(expires)", "(key-id)", "(request-target)"];

/// Resolved values for the covered components of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInput<'a> {
    /// HTTP method, any case; lower-cased into the request target
    pub method: &'a str,
    /// Path component of the target, e.g. `/space/abc/notes`
    pub path: &'a str,
    /// Verification-method id of the signer
    pub key_id: &'a str,
    /// Unix seconds at which the signature was created
    pub created: i64,
    /// Unix seconds after which the signature is no longer valid
    pub expires: i64,
}

/// Build the `(request-target)` value: lower-cased method, space, path
pub fn request_target(method: &str, path: &str) -> String {
    format!("{} {}", method.to_ascii_lowercase(), path)
}

/// Build the canonical signature base for the input
///
/// Each covered component is rendered as `name: value`, joined by `\n`,
/// in the fixed [`COVERED_COMPONENTS`] order.
pub fn signature_base(input: &SignatureInput<'_>) -> String {
    let target = request_target(input.method, input.path);
    format!(
        "(created): {}\n(expires): {}\n(key-id): {}\n(request-target): {}",
        input.created, input.expires, input.key_id, target
    )
}
