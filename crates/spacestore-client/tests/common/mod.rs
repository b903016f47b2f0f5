//! In-memory map-backed fake storage server for protocol tests
//!
//! Emulates the wire behavior of a storage server: blobs keyed by path,
//! per-space controller enforcement over HTTP Signature keyIds, and
//! collection synthesis by path-prefix scan. Test-only; not a reference
//! server implementation.

#![allow(dead_code)]

use async_trait::async_trait;
use spacestore_client::{
    ClientError, Method, Transport, TransportRequest, TransportResponse,
};
use spacestore_core::{is_activitystreams_media_type, Collection, CollectionItem, ResourcePath};
use spacestore_signature::{controller_of_verification_method, Authorization};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Clone)]
struct StoredBlob {
    media_type: Option<String>,
    data: Vec<u8>,
}

#[derive(Default)]
struct State {
    blobs: HashMap<String, StoredBlob>,
    // space path -> controller did
    controllers: HashMap<String, String>,
    requests: Vec<TransportRequest>,
}

#[derive(Default)]
pub struct MemoryTransport {
    state: Mutex<State>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request that reached the transport, in order
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }
}

fn authorized(state: &State, space_path: &str, request: &TransportRequest) -> bool {
    let Some(controller) = state.controllers.get(space_path) else {
        // spaces without a controller accept unsigned requests
        return true;
    };
    let Some(value) = request.header("authorization") else {
        return false;
    };
    let Ok(authorization) = Authorization::parse(value) else {
        return false;
    };
    match controller_of_verification_method(&authorization.key_id) {
        Ok(did) => did == controller,
        Err(_) => false,
    }
}

fn respond(status: u16, media_type: Option<&str>, body: Vec<u8>) -> TransportResponse {
    let mut headers = Vec::new();
    if let Some(media_type) = media_type {
        headers.push(("content-type".to_string(), media_type.to_string()));
    }
    TransportResponse {
        status,
        headers,
        body,
    }
}

/// Synthesize a collection listing from every blob under the path prefix
fn collection_at(state: &State, path: &str) -> Collection {
    let mut items: Vec<CollectionItem> = state
        .blobs
        .keys()
        .filter(|key| key.starts_with(path) && key.as_str() != path)
        .map(|key| CollectionItem {
            name: key[path.len()..].to_string(),
            url: path.to_string(),
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));
    Collection {
        kind: "Collection".to_string(),
        total_items: items.len() as u64,
        items,
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());

        let path = request.path.clone();
        let parsed = ResourcePath::parse(&path)?;
        let space_path = parsed.space_path().to_string();

        if !authorized(&state, &space_path, &request) {
            return Ok(respond(401, None, vec![]));
        }

        match request.method {
            Method::Put | Method::Post => {
                let data = request.body.clone().unwrap_or_default();
                // a JSON write to the space path itself may set the controller
                if parsed.resource_path().is_empty() {
                    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&data) {
                        if let Some(controller) =
                            value.get("controller").and_then(|c| c.as_str())
                        {
                            state
                                .controllers
                                .insert(space_path.clone(), controller.to_string());
                        }
                    }
                }
                let media_type = request.header("content-type").map(str::to_string);
                state.blobs.insert(path, StoredBlob { media_type, data });
                let status = if request.method == Method::Post { 201 } else { 204 };
                Ok(respond(status, None, vec![]))
            }
            Method::Get => {
                let Some(stored) = state.blobs.get(&path) else {
                    return Ok(respond(404, None, vec![]));
                };
                // ActivityStreams blobs that parse as collections get their
                // listing synthesized from the current map contents
                if stored
                    .media_type
                    .as_deref()
                    .is_some_and(is_activitystreams_media_type)
                    && Collection::from_json_bytes(&stored.data).is_ok()
                {
                    let media_type = stored.media_type.clone();
                    let body = serde_json::to_vec(&collection_at(&state, &path)).unwrap();
                    return Ok(respond(200, media_type.as_deref(), body));
                }
                Ok(respond(200, stored.media_type.as_deref(), stored.data.clone()))
            }
            Method::Delete => {
                state.blobs.remove(&path);
                Ok(respond(204, None, vec![]))
            }
        }
    }
}
