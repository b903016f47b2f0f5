//! Shape of a fetched collection body

use crate::error::ShapeError;
use serde::{Deserialize, Serialize};

/// One entry of a collection listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub name: String,
    pub url: String,
}

/// A single fetched collection page
///
/// The wire shape is `{"type":"Collection","totalItems":n,"items":[...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(rename = "totalItems")]
    pub total_items: u64,

    pub items: Vec<CollectionItem>,
}

impl Collection {
    /// Parse and shape-validate a collection body
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] when the body is not JSON of the expected
    /// structure or its `type` is not `"Collection"`. This is distinct from
    /// any transport-level failure.
    pub fn from_json_bytes(body: &[u8]) -> Result<Self, ShapeError> {
        let collection: Self = serde_json::from_slice(body)?;
        if collection.kind != "Collection" {
            return Err(ShapeError::NotACollection(collection.kind));
        }
        Ok(collection)
    }
}
