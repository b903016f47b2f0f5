//! # spacestore-client
//!
//! Signed-request client for spacestore space/resource object storage.
//!
//! A [`StorageClient`] builds [`Space`] handles, spaces build [`Resource`]
//! handles, and every operation is one signed (or deliberately unsigned)
//! request/response round trip through an injected [`Transport`]. When a
//! signer is in effect, the `Authorization` header carries an HTTP
//! Signature over a fixed set of covered components; see
//! `spacestore-signature`.
//!
//! ## Example
//!
//! ```no_run
//! use spacestore_client::{Blob, RequestOptions, ResourceOptions, SpaceOptions, StorageClient};
//! use spacestore_signature::Ed25519Signer;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), spacestore_client::ClientError> {
//! let client = StorageClient::new("https://storage.example")?;
//! let signer = Arc::new(Ed25519Signer::generate());
//!
//! let space = client.space(SpaceOptions::new().signer(signer))?;
//! let resource = space.resource(ResourceOptions::new().path("notes/today.txt"));
//!
//! resource
//!     .put(Some(Blob::text("hello")), RequestOptions::new())
//!     .await?;
//! let fetched = resource.get(RequestOptions::new()).await?;
//! assert!(fetched.ok());
//! assert_eq!(fetched.blob(), b"hello");
//! # Ok(())
//! # }
//! ```

mod client;
mod collection;
mod error;
mod response;
mod transport;

pub use client::{
    Blob, RequestOptions, Resource, ResourceOptions, Space, SpaceOptions, StorageClient,
};
pub use collection::CollectionItems;
pub use error::ClientError;
pub use response::StorageResponse;
pub use transport::{HttpTransport, Method, Transport, TransportRequest, TransportResponse};

// the item type yielded by collection iteration
pub use spacestore_core::CollectionItem;
