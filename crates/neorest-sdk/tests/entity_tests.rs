//! Integration tests for connecting, nodes and entity properties

mod common;

use axum::http::StatusCode;
use common::{closed_port_url, spawn, spawn_with, FakeOptions};
use neorest_sdk::{ClientConfig, Database, Entity, SdkError};
use serde_json::json;

#[tokio::test]
async fn test_connect_reads_service_root() {
    let server = spawn().await;

    let db = Database::connect(&ClientConfig::new(format!("{}/", server.base)))
        .await
        .unwrap();

    assert_eq!(db.url(), server.base);
    assert_eq!(db.version(), Some("1.8.2"));
    assert_eq!(
        db.service_root().node.as_deref(),
        Some(format!("{}/node", server.base).as_str())
    );
    assert!(db.service_root().relationship_types_endpoint().is_some());
}

#[tokio::test]
async fn test_connect_bad_response() {
    let server = spawn_with(FakeOptions {
        root_status: StatusCode::SERVICE_UNAVAILABLE,
        ..Default::default()
    })
    .await;

    let result = Database::connect(&ClientConfig::new(&server.base)).await;
    assert!(matches!(result, Err(SdkError::BadResponse { status: 503 })));
}

#[tokio::test]
async fn test_connect_not_found() {
    let server = spawn().await;
    let wrong_base = server.base.replace("/db/data", "/db/nothing");

    let result = Database::connect(&ClientConfig::new(wrong_base)).await;
    assert!(matches!(result, Err(SdkError::NotFound)));
}

#[tokio::test]
async fn test_connect_failure() {
    let result = Database::connect(&ClientConfig::new(closed_port_url().await)).await;
    assert!(matches!(result, Err(SdkError::Transport(_))));
}

#[tokio::test]
async fn test_connect_invalid_config() {
    let result = Database::connect(&ClientConfig::new("not a url")).await;
    assert!(matches!(result, Err(SdkError::Config(_))));
}

#[tokio::test]
async fn test_get_node() {
    let server = spawn().await;
    let db = Database::connect(&ClientConfig::new(&server.base)).await.unwrap();

    let node = db.nodes().get(2).await.unwrap();
    assert_eq!(node.id().unwrap().value(), 2);
    assert_eq!(
        node.all_relationships_uri(),
        Some(format!("{}/node/2/relationships/all", server.base).as_str())
    );

    assert!(matches!(db.nodes().get(8).await, Err(SdkError::NotFound)));
}

#[tokio::test]
async fn test_relationship_properties() {
    let server = spawn().await;
    let db = Database::connect(&ClientConfig::new(&server.base)).await.unwrap();

    let rel = db.relationships().get(42).await.unwrap();
    let props = db.properties(&rel).await.unwrap();
    assert_eq!(props.get("since"), Some(&json!(2001)));
    assert_eq!(props.get("weight"), Some(&json!(0.5)));

    assert_eq!(db.property(&rel, "since").await.unwrap(), json!(2001));
    assert_eq!(db.property(&rel, "met at").await.unwrap(), json!("conference"));
    assert!(matches!(db.property(&rel, "missing").await, Err(SdkError::NotFound)));
}

#[tokio::test]
async fn test_properties_no_content_is_empty() {
    let server = spawn().await;
    let db = Database::connect(&ClientConfig::new(&server.base)).await.unwrap();

    let rel = db.relationships().get(43).await.unwrap();
    assert!(db.properties(&rel).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_node_properties_via_relationship_endpoint() {
    let server = spawn().await;
    let db = Database::connect(&ClientConfig::new(&server.base)).await.unwrap();

    let rel = db.relationships().get(42).await.unwrap();
    let end = rel.end(&db).await.unwrap();

    let props = db.properties(&end).await.unwrap();
    assert_eq!(props.get("name"), Some(&json!("Bob")));
}

#[tokio::test]
async fn test_delete() {
    let server = spawn().await;
    let db = Database::connect(&ClientConfig::new(&server.base)).await.unwrap();

    let rel = db.relationships().get(42).await.unwrap();
    db.delete(&rel).await.unwrap();

    let linked = db.nodes().get(1).await.unwrap();
    assert!(matches!(db.delete(&linked).await, Err(SdkError::CannotDelete)));

    let lonely = db.nodes().get(3).await.unwrap();
    db.delete(&lonely).await.unwrap();

    let gone = db.relationships().get(1500).await.unwrap();
    assert!(matches!(db.delete(&gone).await, Err(SdkError::NotFound)));
}

#[tokio::test]
async fn test_delete_only_accepts_no_content() {
    let server = spawn().await;
    let db = Database::connect(&ClientConfig::new(&server.base)).await.unwrap();

    let rel = db.relationships().get(1200).await.unwrap();
    assert!(matches!(db.delete(&rel).await, Err(SdkError::BadResponse { status: 200 })));
}

#[tokio::test]
async fn test_shared_between_tasks() {
    let server = spawn().await;
    let db = std::sync::Arc::new(Database::connect(&ClientConfig::new(&server.base)).await.unwrap());

    let handles: Vec<_> = (1000u64..1004)
        .map(|id| {
            let db = db.clone();
            tokio::spawn(async move { db.relationships().get(id).await.map(|r| r.self_uri().to_string()) })
        })
        .collect();

    for (handle, id) in handles.into_iter().zip(1000u64..) {
        let uri = handle.await.unwrap().unwrap();
        assert!(uri.ends_with(&format!("/relationship/{}", id)));
    }
}
