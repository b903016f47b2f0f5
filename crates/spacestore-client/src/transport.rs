//! The injected transport capability and its reqwest-backed default

use crate::error::ClientError;
use async_trait::async_trait;
use std::fmt::{Display, Formatter};

/// HTTP methods used by the storage protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request handed to the transport
#[derive(Debug, Clone, Default)]
pub struct TransportRequest {
    pub method: Method,
    /// Path-only target, e.g. `/space/abc/notes`; the transport resolves
    /// it against whatever origin it is configured with
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// One raw response produced by the transport
///
/// The body is fully buffered so downstream accessors can read it more
/// than once.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// The injected HTTP capability
///
/// The client issues every operation through this single seam; anything
/// beyond a request/response round trip (retries, rate limiting,
/// connection reuse) belongs to the implementation behind it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError>;
}

/// Reqwest-backed [`Transport`] resolving paths against a base origin URL
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpTransport {
    /// Create a transport sending requests to the given base origin
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = reqwest::Url::parse(base_url)
            .map_err(|e| ClientError::Transport(format!("invalid base url: {}", e)))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Create a transport with custom reqwest settings
    pub fn with_client(client: reqwest::Client, base_url: reqwest::Url) -> Self {
        Self { client, base_url }
    }

    /// The base origin requests are resolved against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|e| ClientError::Transport(format!("invalid request path: {}", e)))?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
