//! # spacestore-core
//!
//! Addressing model and collection shapes for the spacestore storage
//! protocol.
//!
//! This crate provides:
//! - `urn:uuid:` space identifier parsing and validation
//! - `/space/{uuid}[/...]` path derivation and lossless parsing
//! - ActivityStreams media-type constants for collection fetches
//! - Shape validation for fetched collection bodies
//!
//! ## Example
//!
//! ```rust
//! use spacestore_core::{ResourcePath, SpacePath, UrnUuid};
//!
//! let id = UrnUuid::parse("urn:uuid:0f6a1c2d-3e4f-4b36-9e1f-3b4a9cf25f6e")?;
//! let space = SpacePath::for_space(&id);
//! let resource = space.resource(Some("notes/today.txt"));
//!
//! let reparsed = ResourcePath::parse(resource.as_str())?;
//! assert_eq!(reparsed.space_path(), space.as_str());
//! # Ok::<(), spacestore_core::AddressError>(())
//! ```

pub mod activitystreams;
pub mod collection;
pub mod error;
pub mod path;
pub mod urn;

pub use activitystreams::{
    is_activitystreams_media_type, ACTIVITYSTREAMS_MEDIA_TYPE,
    ACTIVITYSTREAMS_MEDIA_TYPE_SANS_WHITESPACE,
};
pub use collection::{Collection, CollectionItem};
pub use error::{AddressError, ShapeError};
pub use path::{ResourcePath, SpacePath, SPACE_ROUTE_PREFIX};
pub use urn::{is_urn_uuid, UrnUuid, URN_UUID_PREFIX};
