//! Storage client handles: `StorageClient` → `Space` → `Resource`

use crate::collection::{fetch_collection, CollectionItems};
use crate::error::ClientError;
use crate::response::StorageResponse;
use crate::transport::{HttpTransport, Method, Transport, TransportRequest};
use spacestore_core::{ResourcePath, SpacePath, UrnUuid};
use spacestore_signature::{create_authorization, Signer, DEFAULT_VALIDITY};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// A payload carried by PUT and POST operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
    pub media_type: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            media_type: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// A `text/plain` blob
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text.into().into_bytes()).with_media_type("text/plain")
    }

    /// An `application/json` blob
    pub fn json(value: &serde_json::Value) -> Result<Self, ClientError> {
        Ok(Self::new(serde_json::to_vec(value)?).with_media_type("application/json"))
    }
}

/// Per-call options for a storage operation
///
/// A per-call signer overrides the handle's default signer. Caller-supplied
/// headers are passed through untouched, except that a caller-supplied
/// `authorization` is replaced when a signer is in effect.
#[derive(Clone, Default)]
pub struct RequestOptions {
    pub signer: Option<Arc<dyn Signer>>,
    pub headers: Vec<(String, String)>,
    /// Signature validity window; defaults to 30 seconds
    pub validity: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn validity(mut self, validity: Duration) -> Self {
        self.validity = Some(validity);
        self
    }
}

/// Options for building a [`Space`] handle
#[derive(Clone, Default)]
pub struct SpaceOptions {
    /// `urn:uuid:` identifier of the space; a fresh one is minted if absent
    pub id: Option<String>,
    /// Default signer for operations on the space and its resources
    pub signer: Option<Arc<dyn Signer>>,
}

impl SpaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }
}

/// Options for building a [`Resource`] handle
#[derive(Clone, Default)]
pub struct ResourceOptions {
    /// Space-local resource path; a fresh random segment is minted if
    /// absent, and a missing leading `/` is prepended
    pub path: Option<String>,
    /// Signer overriding the space's default
    pub signer: Option<Arc<dyn Signer>>,
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }
}

/// Factory for [`Space`] handles
///
/// # Example
///
/// ```no_run
/// use spacestore_client::{SpaceOptions, StorageClient};
///
/// # fn main() -> Result<(), spacestore_client::ClientError> {
/// let client = StorageClient::new("https://storage.example")?;
/// let space = client.space(SpaceOptions::new())?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StorageClient {
    transport: Arc<dyn Transport>,
}

impl StorageClient {
    /// Create a client sending requests to the given base origin URL
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(
            base_url,
        )?)))
    }

    /// Create a client issuing requests through a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a handle to a space
    ///
    /// A supplied id must be a `urn:uuid:` URI; an invalid id fails here,
    /// before any network call. Without an id a fresh one is minted.
    pub fn space(&self, options: SpaceOptions) -> Result<Space, ClientError> {
        let id = match options.id {
            Some(id) => UrnUuid::parse(&id)?,
            None => UrnUuid::random(),
        };
        Ok(Space {
            transport: self.transport.clone(),
            id,
            signer: options.signer,
        })
    }
}

/// Handle to one space
///
/// Spaces are the only source of [`Resource`] handles, so every resource
/// path is contained in its space path by construction.
#[derive(Clone)]
pub struct Space {
    transport: Arc<dyn Transport>,
    id: UrnUuid,
    signer: Option<Arc<dyn Signer>>,
}

impl Space {
    pub fn id(&self) -> &UrnUuid {
        &self.id
    }

    pub fn uuid(&self) -> &str {
        self.id.uuid()
    }

    pub fn path(&self) -> SpacePath {
        SpacePath::for_space(&self.id)
    }

    /// Build a handle to a resource in this space
    pub fn resource(&self, options: ResourceOptions) -> Resource {
        Resource {
            transport: self.transport.clone(),
            path: self.path().resource(options.path.as_deref()),
            signer: options.signer.or_else(|| self.signer.clone()),
        }
    }

    pub async fn get(&self, options: RequestOptions) -> Result<StorageResponse, ClientError> {
        self.request(Method::Get, None, options).await
    }

    /// PUT the space representation (e.g. a controller update)
    pub async fn put(
        &self,
        blob: Option<Blob>,
        options: RequestOptions,
    ) -> Result<StorageResponse, ClientError> {
        self.request(Method::Put, blob.as_ref(), options).await
    }

    pub async fn delete(&self, options: RequestOptions) -> Result<StorageResponse, ClientError> {
        self.request(Method::Delete, None, options).await
    }

    /// Fetch a collection at a space-local path and iterate its items
    pub async fn collection(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<CollectionItems, ClientError> {
        let path = self.path().resource(Some(path));
        let signer = effective_signer(&options, &self.signer);
        fetch_collection(self.transport.as_ref(), path.as_str(), signer, &options).await
    }

    async fn request(
        &self,
        method: Method,
        blob: Option<&Blob>,
        options: RequestOptions,
    ) -> Result<StorageResponse, ClientError> {
        let path = self.path();
        let signer = effective_signer(&options, &self.signer);
        dispatch(
            self.transport.as_ref(),
            method,
            path.as_str(),
            blob,
            signer,
            &options,
        )
        .await
    }
}

/// Handle to one resource within a space
#[derive(Clone)]
pub struct Resource {
    transport: Arc<dyn Transport>,
    path: ResourcePath,
    signer: Option<Arc<dyn Signer>>,
}

impl Resource {
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    pub async fn get(&self, options: RequestOptions) -> Result<StorageResponse, ClientError> {
        self.request(Method::Get, None, options).await
    }

    /// PUT the resource; `None` creates an empty resource
    pub async fn put(
        &self,
        blob: Option<Blob>,
        options: RequestOptions,
    ) -> Result<StorageResponse, ClientError> {
        self.request(Method::Put, blob.as_ref(), options).await
    }

    pub async fn post(
        &self,
        blob: Blob,
        options: RequestOptions,
    ) -> Result<StorageResponse, ClientError> {
        self.request(Method::Post, Some(&blob), options).await
    }

    pub async fn delete(&self, options: RequestOptions) -> Result<StorageResponse, ClientError> {
        self.request(Method::Delete, None, options).await
    }

    async fn request(
        &self,
        method: Method,
        blob: Option<&Blob>,
        options: RequestOptions,
    ) -> Result<StorageResponse, ClientError> {
        let signer = effective_signer(&options, &self.signer);
        dispatch(
            self.transport.as_ref(),
            method,
            self.path.as_str(),
            blob,
            signer,
            &options,
        )
        .await
    }
}

/// Per-call signer wins over the handle default; neither means unsigned
pub(crate) fn effective_signer<'a>(
    options: &'a RequestOptions,
    default: &'a Option<Arc<dyn Signer>>,
) -> Option<&'a dyn Signer> {
    options.signer.as_deref().or(default.as_deref())
}

/// Build headers, sign if a signer is in effect, and issue one round trip
///
/// A signing failure aborts before anything is sent; it is never downgraded
/// to an unsigned request.
pub(crate) async fn dispatch(
    transport: &dyn Transport,
    method: Method,
    path: &str,
    blob: Option<&Blob>,
    signer: Option<&dyn Signer>,
    options: &RequestOptions,
) -> Result<StorageResponse, ClientError> {
    let mut headers = options.headers.clone();

    if let Some(media_type) = blob.and_then(|b| b.media_type.as_ref()) {
        if !has_header(&headers, "content-type") {
            headers.push(("content-type".to_string(), media_type.clone()));
        }
    }

    if let Some(signer) = signer {
        let validity = options.validity.unwrap_or(DEFAULT_VALIDITY);
        let authorization = create_authorization(signer, method.as_str(), path, validity).await?;
        // only the authorization header may be replaced
        headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
        headers.push(("authorization".to_string(), authorization));
    }

    debug!(%method, path, signed = signer.is_some(), "sending storage request");

    let response = transport
        .send(TransportRequest {
            method,
            path: path.to_string(),
            headers,
            body: blob.map(|b| b.data.clone()),
        })
        .await?;

    Ok(StorageResponse::from_transport(response))
}

fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
}
