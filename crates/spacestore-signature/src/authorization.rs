//! `Authorization: Signature ...` header rendering and parsing

use crate::canonical::{signature_base, SignatureInput, COVERED_COMPONENTS};
use crate::error::SignatureError;
use crate::signer::Signer;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use std::time::Duration;

/// Default validity window of a signature
pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(30);

/// Scheme prefix of a rendered authorization value
pub const SIGNATURE_SCHEME: &str = "Signature ";

/// Build an authorization value for one request
///
/// Signs the canonical base over the covered components with `created`
/// fixed at the current time and `expires` at `created + validity`. The
/// descriptor is consumed by this one call; timestamps make each rendered
/// signature single-use in effect.
///
/// # Errors
///
/// A failing signer propagates as [`SignatureError`]; the caller must not
/// fall back to sending the request unsigned.
pub async fn create_authorization(
    signer: &dyn Signer,
    method: &str,
    path: &str,
    validity: Duration,
) -> Result<String, SignatureError> {
    let created = Utc::now().timestamp();
    let expires = created + validity.as_secs() as i64;

    let input = SignatureInput {
        method,
        path,
        key_id: signer.id(),
        created,
        expires,
    };
    let base = signature_base(&input);
    let signature = signer.sign(base.as_bytes()).await?;

    Ok(format!(
        "{}keyId=\"{}\",created={},expires={},headers=\"{}\",signature=\"{}\"",
        SIGNATURE_SCHEME,
        signer.id(),
        created,
        expires,
        COVERED_COMPONENTS.join(" "),
        BASE64.encode(signature)
    ))
}

/// Parameters recovered from a rendered authorization value
///
/// This is the verifier-side view; the client itself only renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    pub key_id: String,
    pub created: i64,
    pub expires: i64,
    pub headers: Vec<String>,
    pub signature: Vec<u8>,
}

impl Authorization {
    /// Parse a `Signature keyId="...",...` authorization value
    pub fn parse(value: &str) -> Result<Self, SignatureError> {
        let params = value.strip_prefix(SIGNATURE_SCHEME).ok_or_else(|| {
            SignatureError::MalformedAuthorization(format!(
                "expected '{}' scheme: {}",
                SIGNATURE_SCHEME.trim_end(),
                value
            ))
        })?;

        let mut key_id = None;
        let mut created = None;
        let mut expires = None;
        let mut headers = None;
        let mut signature = None;

        for param in params.split(',') {
            let (name, raw) = param.split_once('=').ok_or_else(|| {
                SignatureError::MalformedAuthorization(format!("bad parameter: {}", param))
            })?;
            let unquoted = raw.trim_matches('"');
            match name {
                "keyId" => key_id = Some(unquoted.to_string()),
                "created" => created = Some(parse_timestamp(name, unquoted)?),
                "expires" => expires = Some(parse_timestamp(name, unquoted)?),
                "headers" => {
                    headers = Some(unquoted.split(' ').map(str::to_string).collect());
                }
                "signature" => {
                    signature = Some(BASE64.decode(unquoted).map_err(|e| {
                        SignatureError::MalformedAuthorization(format!(
                            "signature is not base64: {}",
                            e
                        ))
                    })?);
                }
                // unknown parameters are ignored
                _ => {}
            }
        }

        Ok(Self {
            key_id: require(key_id, "keyId")?,
            created: require(created, "created")?,
            expires: require(expires, "expires")?,
            headers: require(headers, "headers")?,
            signature: require(signature, "signature")?,
        })
    }
}

fn parse_timestamp(name: &str, raw: &str) -> Result<i64, SignatureError> {
    raw.parse().map_err(|_| {
        SignatureError::MalformedAuthorization(format!("{} is not an integer: {}", name, raw))
    })
}

fn require<T>(value: Option<T>, name: &str) -> Result<T, SignatureError> {
    value.ok_or_else(|| {
        SignatureError::MalformedAuthorization(format!("missing parameter {}", name))
    })
}
