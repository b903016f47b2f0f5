//! `urn:uuid:` identifier parsing and validation

use crate::error::AddressError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Prefix of every space identifier
pub const URN_UUID_PREFIX: &str = "urn:uuid:";

/// Check whether the value is a `urn:uuid:` URI
///
/// This is a prefix test only; the suffix is not validated further.
pub fn is_urn_uuid(v: &str) -> bool {
    v.starts_with(URN_UUID_PREFIX)
}

/// A validated `urn:uuid:` space identifier
///
/// # Examples
///
/// ```rust
/// use spacestore_core::UrnUuid;
///
/// let id = UrnUuid::parse("urn:uuid:3b4a9cf2-5f6e-4b36-9e1f-0f6a1c2d3e4f").unwrap();
/// assert_eq!(id.uuid(), "3b4a9cf2-5f6e-4b36-9e1f-0f6a1c2d3e4f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrnUuid {
    urn: String,
    // byte length of the uuid segment following the prefix
    uuid_len: usize,
}

impl UrnUuid {
    /// Parse a `urn:uuid:…` URI
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not start with `urn:uuid:` or
    /// if no uuid segment follows the prefix.
    pub fn parse(v: &str) -> Result<Self, AddressError> {
        if !is_urn_uuid(v) {
            return Err(AddressError::NotAUrnUuid(v.to_string()));
        }

        // the uuid runs up to the next `:`-delimited segment, if any
        let rest = &v[URN_UUID_PREFIX.len()..];
        let uuid_len = rest.find(':').unwrap_or(rest.len());
        if uuid_len == 0 {
            return Err(AddressError::MissingUuid(v.to_string()));
        }

        Ok(Self {
            urn: v.to_string(),
            uuid_len,
        })
    }

    /// Mint a fresh identifier from a random v4 uuid
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self {
            urn: format!("{}{}", URN_UUID_PREFIX, uuid),
            uuid_len: uuid.to_string().len(),
        }
    }

    /// The bare uuid, without the `urn:uuid:` prefix or any trailing segment
    pub fn uuid(&self) -> &str {
        &self.urn[URN_UUID_PREFIX.len()..URN_UUID_PREFIX.len() + self.uuid_len]
    }

    /// The full `urn:uuid:…` string
    pub fn as_str(&self) -> &str {
        &self.urn
    }
}

impl Display for UrnUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.urn)
    }
}

impl FromStr for UrnUuid {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
