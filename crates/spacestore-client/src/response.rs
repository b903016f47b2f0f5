//! Normalized view over a transport response

use crate::error::ClientError;
use crate::transport::TransportResponse;

/// A storage response
///
/// The body is owned, so [`blob`](Self::blob) and [`json`](Self::json)
/// can be called any number of times; each call works on an independent
/// copy rather than a single-consumption stream.
#[derive(Debug, Clone)]
pub struct StorageResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl StorageResponse {
    pub(crate) fn from_transport(response: TransportResponse) -> Self {
        Self {
            status: response.status,
            headers: response.headers,
            body: response.body,
        }
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// True iff the status reports success (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Iterate the response headers as name/value pairs
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Copy of the body bytes
    pub fn blob(&self) -> Vec<u8> {
        self.body.clone()
    }

    /// Borrow the body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
