//! Storage path parsing and derivation
//!
//! Spaces live at `/space/{uuid}` and resources at
//! `/space/{uuid}/{resourcePath...}`. A space path is always derived from
//! its identifier; a resource path is always derived from a space path plus
//! a normalized resource segment, so a client can never address a resource
//! outside its space.

use crate::error::AddressError;
use crate::urn::UrnUuid;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Route prefix under which all spaces live
pub const SPACE_ROUTE_PREFIX: &str = "/space/";

/// Path addressing a space: `/space/{uuid}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpacePath(String);

impl SpacePath {
    /// Derive the path of the space named by the identifier
    pub fn for_space(id: &UrnUuid) -> Self {
        Self(format!("{}{}", SPACE_ROUTE_PREFIX, id.uuid()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a resource segment onto this space path
    ///
    /// The segment is normalized: a leading `/` is preserved, otherwise one
    /// is prepended. `None` mints a fresh random segment.
    pub fn resource(&self, segment: Option<&str>) -> ResourcePath {
        let local = normalize_segment(segment);
        ResourcePath {
            full: format!("{}{}", self.0, local),
            space_len: self.0.len(),
        }
    }
}

impl Display for SpacePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path addressing a resource within a space: `/space/{uuid}/{resourcePath...}`
///
/// Parsing is lossless: the owning space path and the space-local remainder
/// are both recoverable.
///
/// # Examples
///
/// ```rust
/// use spacestore_core::ResourcePath;
///
/// let path = ResourcePath::parse("/space/abc/notes/today.txt").unwrap();
/// assert_eq!(path.space_path(), "/space/abc");
/// assert_eq!(path.resource_path(), "/notes/today.txt");
/// assert_eq!(path.as_str(), "/space/abc/notes/today.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    full: String,
    // byte offset where the space path ends and the remainder begins
    space_len: usize,
}

impl ResourcePath {
    /// Parse a full storage path into its space path and remainder
    ///
    /// Matches a `/space/<id>` segment (id runs up to the next `/`); the
    /// remainder may be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains no `/space/<id>` prefix.
    pub fn parse(path: &str) -> Result<Self, AddressError> {
        let start = path
            .find(SPACE_ROUTE_PREFIX)
            .ok_or_else(|| AddressError::MissingSpacePath(path.to_string()))?;

        let id_start = start + SPACE_ROUTE_PREFIX.len();
        let rest = &path[id_start..];
        let id_len = rest.find('/').unwrap_or(rest.len());
        if id_len == 0 {
            return Err(AddressError::MissingSpacePath(path.to_string()));
        }

        Ok(Self {
            full: path[start..].to_string(),
            space_len: SPACE_ROUTE_PREFIX.len() + id_len,
        })
    }

    /// The `/space/{uuid}` prefix naming the owning space
    pub fn space_path(&self) -> &str {
        &self.full[..self.space_len]
    }

    /// The space-local remainder, including its leading `/` (may be empty)
    pub fn resource_path(&self) -> &str {
        &self.full[self.space_len..]
    }

    /// The full path as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl FromStr for ResourcePath {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Normalize a caller-supplied resource segment to a rooted local path
///
/// Absent segments get a fresh random uuid so distinct anonymous resources
/// never collide.
fn normalize_segment(segment: Option<&str>) -> String {
    match segment {
        Some(s) if s.starts_with('/') => s.to_string(),
        Some(s) => format!("/{}", s),
        None => format!("/{}", Uuid::new_v4()),
    }
}
