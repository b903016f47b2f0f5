//! Single-page collection iteration

use crate::client::{dispatch, RequestOptions};
use crate::error::ClientError;
use crate::transport::{Method, Transport};
use spacestore_core::{Collection, CollectionItem, ACTIVITYSTREAMS_MEDIA_TYPE};
use spacestore_signature::Signer;
use tracing::debug;

/// Items of one fetched collection page
///
/// A finite, consuming iterator drawn from a single fetch; iterating it
/// out does not re-fetch. Call the collection operation again for a fresh
/// view.
#[derive(Debug)]
pub struct CollectionItems {
    total_items: u64,
    items: std::vec::IntoIter<CollectionItem>,
}

impl CollectionItems {
    /// `totalItems` as reported by the fetched page
    pub fn total_items(&self) -> u64 {
        self.total_items
    }
}

impl Iterator for CollectionItems {
    type Item = CollectionItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// Fetch a collection with one signed GET and expose its items
///
/// # Errors
///
/// - 404 → [`ClientError::NotFound`]
/// - 401 → [`ClientError::Unauthorized`]
/// - other non-2xx → [`ClientError::FetchFailed`] carrying the response
/// - 2xx with a body that is not a `Collection` → [`ClientError::Shape`]
pub(crate) async fn fetch_collection(
    transport: &dyn Transport,
    path: &str,
    signer: Option<&dyn Signer>,
    options: &RequestOptions,
) -> Result<CollectionItems, ClientError> {
    let mut options = options.clone();
    if !options
        .headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("accept"))
    {
        options
            .headers
            .push(("accept".to_string(), ACTIVITYSTREAMS_MEDIA_TYPE.to_string()));
    }

    let response = dispatch(transport, Method::Get, path, None, signer, &options).await?;
    match response.status() {
        404 => return Err(ClientError::NotFound(response)),
        401 => return Err(ClientError::Unauthorized(response)),
        _ if !response.ok() => return Err(ClientError::FetchFailed(response)),
        _ => {}
    }

    let collection = Collection::from_json_bytes(response.bytes()).map_err(|e| {
        debug!(path, error = %e, "fetched collection body has unexpected shape");
        e
    })?;

    Ok(CollectionItems {
        total_items: collection.total_items,
        items: collection.items.into_iter(),
    })
}
