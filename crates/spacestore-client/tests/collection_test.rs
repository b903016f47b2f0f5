//! Collection iteration against the in-memory fake server

mod common;

use common::MemoryTransport;
use spacestore_client::{
    Blob, ClientError, RequestOptions, ResourceOptions, Space, SpaceOptions, StorageClient,
};
use spacestore_core::{ShapeError, ACTIVITYSTREAMS_MEDIA_TYPE};
use spacestore_signature::Ed25519Signer;
use std::sync::Arc;

fn client() -> (Arc<MemoryTransport>, StorageClient) {
    let transport = Arc::new(MemoryTransport::new());
    let client = StorageClient::with_transport(transport.clone());
    (transport, client)
}

/// Store a collection resource the fake server will synthesize items for
async fn seed_collection(space: &Space, path: &str) {
    let body = serde_json::json!({
        "type": "Collection",
        "totalItems": 0,
        "items": [],
    });
    let blob = Blob::new(serde_json::to_vec(&body).unwrap())
        .with_media_type(ACTIVITYSTREAMS_MEDIA_TYPE);
    let put = space
        .resource(ResourceOptions::new().path(path))
        .put(Some(blob), RequestOptions::new())
        .await
        .unwrap();
    assert!(put.ok());
}

#[tokio::test]
async fn test_collection_yields_every_item_under_the_prefix() {
    let (_, client) = client();
    let space = client.space(SpaceOptions::new()).unwrap();
    seed_collection(&space, "albums").await;

    for name in ["a.jpg", "b.jpg", "c.jpg"] {
        space
            .resource(ResourceOptions::new().path(&format!("albums/{}", name)))
            .put(Some(Blob::text("pixels")), RequestOptions::new())
            .await
            .unwrap();
    }

    let items = space
        .collection("albums", RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(items.total_items(), 3);

    let names: Vec<String> = items.map(|item| item.name).collect();
    assert_eq!(names, ["/a.jpg", "/b.jpg", "/c.jpg"]);
}

#[tokio::test]
async fn test_empty_collection_yields_nothing() {
    let (_, client) = client();
    let space = client.space(SpaceOptions::new()).unwrap();
    seed_collection(&space, "empty").await;

    let mut items = space
        .collection("empty", RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(items.total_items(), 0);
    assert!(items.next().is_none());
}

#[tokio::test]
async fn test_collection_fetch_sends_activitystreams_accept() {
    let (transport, client) = client();
    let space = client.space(SpaceOptions::new()).unwrap();
    seed_collection(&space, "typed").await;

    space
        .collection("typed", RequestOptions::new())
        .await
        .unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.header("accept"), Some(ACTIVITYSTREAMS_MEDIA_TYPE));
}

#[tokio::test]
async fn test_missing_collection_is_not_found_error() {
    let (_, client) = client();
    let space = client.space(SpaceOptions::new()).unwrap();

    let result = space.collection("nowhere", RequestOptions::new()).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn test_malformed_body_is_shape_error_not_transport_error() {
    let (_, client) = client();
    let space = client.space(SpaceOptions::new()).unwrap();

    // typed as ActivityStreams but not a Collection body
    let blob = Blob::new(b"not json at all".to_vec())
        .with_media_type(ACTIVITYSTREAMS_MEDIA_TYPE);
    space
        .resource(ResourceOptions::new().path("mangled"))
        .put(Some(blob), RequestOptions::new())
        .await
        .unwrap();

    let result = space.collection("mangled", RequestOptions::new()).await;
    assert!(matches!(
        result,
        Err(ClientError::Shape(ShapeError::Json(_)))
    ));
}

#[tokio::test]
async fn test_unauthorized_collection_fetch_is_distinct_error() {
    let (_, client) = client();
    let signer = Arc::new(Ed25519Signer::generate());
    let space = client
        .space(SpaceOptions::new().signer(signer.clone()))
        .unwrap();
    seed_collection(&space, "private").await;

    let controller_update = Blob::json(&serde_json::json!({
        "controller": signer.did(),
    }))
    .unwrap();
    space
        .put(Some(controller_update), RequestOptions::new())
        .await
        .unwrap();

    // same space, no signer
    let unsigned_space = client
        .space(SpaceOptions::new().id(space.id().as_str()))
        .unwrap();
    let result = unsigned_space
        .collection("private", RequestOptions::new())
        .await;
    assert!(matches!(result, Err(ClientError::Unauthorized(_))));

    // the controlling signer still iterates
    let items = space
        .collection("private", RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(items.total_items(), 0);
}
