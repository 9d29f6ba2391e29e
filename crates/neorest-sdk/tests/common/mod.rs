//! In-process fake of the database REST API for integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Knobs for the fake server
#[derive(Clone)]
pub struct FakeOptions {
    /// Advertise the relationship-types endpoint in the service root
    pub advertise_types: bool,
    /// Status returned by the relationship-types endpoint
    pub types_status: StatusCode,
    /// Status returned by the service root
    pub root_status: StatusCode,
}

impl Default for FakeOptions {
    fn default() -> Self {
        Self {
            advertise_types: true,
            types_status: StatusCode::OK,
            root_status: StatusCode::OK,
        }
    }
}

#[derive(Clone)]
struct FakeState {
    base: String,
    options: FakeOptions,
    types_hits: Arc<AtomicUsize>,
}

/// A running fake server
pub struct FakeServer {
    /// Base URL, e.g. `http://127.0.0.1:PORT/db/data`
    pub base: String,
    types_hits: Arc<AtomicUsize>,
}

impl FakeServer {
    /// Number of requests the relationship-types endpoint received
    pub fn types_hits(&self) -> usize {
        self.types_hits.load(Ordering::SeqCst)
    }
}

/// Start a fake server with default options
pub async fn spawn() -> FakeServer {
    spawn_with(FakeOptions::default()).await
}

/// Start a fake server on an ephemeral port
pub async fn spawn_with(options: FakeOptions) -> FakeServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/db/data", listener.local_addr().unwrap());
    let types_hits = Arc::new(AtomicUsize::new(0));

    let state = FakeState {
        base: base.clone(),
        options,
        types_hits: types_hits.clone(),
    };

    let app = Router::new()
        .route("/db/data", get(service_root))
        .route("/db/data/", get(service_root))
        .route("/db/data/relationship/types", get(relationship_types))
        .route(
            "/db/data/relationship/:id",
            get(get_relationship).delete(delete_relationship),
        )
        .route("/db/data/relationship/:id/properties", get(relationship_properties))
        .route("/db/data/relationship/:id/properties/:key", get(relationship_property))
        .route("/db/data/node/:id", get(get_node).delete(delete_node))
        .route("/db/data/node/:id/properties", get(node_properties))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeServer { base, types_hits }
}

/// URL of a port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/db/data", addr)
}

fn server_error(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "message": message,
        "exception": "FakeServerException",
        "stacktrace": ["org.example.Fake.handle(Fake.java:1)"]
    });
    (status, Json(body)).into_response()
}

fn not_found(what: &str) -> Response {
    server_error(StatusCode::NOT_FOUND, &format!("{} not found", what))
}

async fn service_root(State(s): State<FakeState>) -> Response {
    if s.options.root_status != StatusCode::OK {
        return server_error(s.options.root_status, "service root unavailable");
    }

    let mut root = json!({
        "extensions": {},
        "node": format!("{}/node", s.base),
        "node_index": format!("{}/index/node", s.base),
        "relationship_index": format!("{}/index/relationship", s.base),
        "extensions_info": format!("{}/ext", s.base),
        "batch": format!("{}/batch", s.base),
        "cypher": format!("{}/cypher", s.base),
        "neo4j_version": "1.8.2"
    });
    if s.options.advertise_types {
        root["relationship_types"] = Value::String(format!("{}/relationship/types", s.base));
    }
    Json(root).into_response()
}

async fn relationship_types(State(s): State<FakeState>) -> Response {
    s.types_hits.fetch_add(1, Ordering::SeqCst);
    if s.options.types_status != StatusCode::OK {
        return server_error(s.options.types_status, "types unavailable");
    }
    Json(json!(["LIKES", "KNOWS", "FOLLOWS", "BLOCKS"])).into_response()
}

fn relationship_json(base: &str, self_segment: &str, rel_type: &str, start: u64, end: u64) -> Value {
    let self_uri = format!("{}/relationship/{}", base, self_segment);
    json!({
        "start": format!("{}/node/{}", base, start),
        "data": {},
        "self": self_uri,
        "property": format!("{}/properties/{{key}}", self_uri),
        "properties": format!("{}/properties", self_uri),
        "type": rel_type,
        "extensions": {},
        "end": format!("{}/node/{}", base, end)
    })
}

async fn get_relationship(State(s): State<FakeState>, Path(id): Path<String>) -> Response {
    match id.as_str() {
        "42" => Json(relationship_json(&s.base, "42", "KNOWS", 1, 2)).into_response(),
        "43" => Json(relationship_json(&s.base, "43", "LIKES", 2, 404)).into_response(),
        "99" => Json(relationship_json(&s.base, "ninety-nine", "KNOWS", 1, 2)).into_response(),
        "500" => server_error(StatusCode::INTERNAL_SERVER_ERROR, "database exploded"),
        "503" => server_error(StatusCode::SERVICE_UNAVAILABLE, "try later"),
        "777" => (StatusCode::OK, "this is not json").into_response(),
        other => match other.parse::<u64>() {
            // Any id in 1000..2000 exists and is a FOLLOWS edge from node 1 to node 2
            Ok(n) if (1000..2000).contains(&n) => {
                Json(relationship_json(&s.base, other, "FOLLOWS", 1, 2)).into_response()
            }
            _ => not_found("relationship"),
        },
    }
}

async fn delete_relationship(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "42" => StatusCode::NO_CONTENT.into_response(),
        // Answers 200 instead of the 204 a real delete produces
        "1200" => (StatusCode::OK, Json(json!({}))).into_response(),
        _ => not_found("relationship"),
    }
}

async fn relationship_properties(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "42" => Json(json!({"since": 2001, "weight": 0.5})).into_response(),
        "43" => StatusCode::NO_CONTENT.into_response(),
        "500" => server_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
        _ => not_found("relationship"),
    }
}

async fn relationship_property(Path((id, key)): Path<(String, String)>) -> Response {
    match (id.as_str(), key.as_str()) {
        ("42", "since") => Json(json!(2001)).into_response(),
        ("42", "met at") => Json(json!("conference")).into_response(),
        _ => not_found("property"),
    }
}

async fn get_node(State(s): State<FakeState>, Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" | "2" | "3" => {
            let self_uri = format!("{}/node/{}", s.base, id);
            Json(json!({
                "outgoing_relationships": format!("{}/relationships/out", self_uri),
                "data": {},
                "all_relationships": format!("{}/relationships/all", self_uri),
                "property": format!("{}/properties/{{key}}", self_uri),
                "self": self_uri,
                "properties": format!("{}/properties", self_uri),
                "incoming_relationships": format!("{}/relationships/in", self_uri),
                "extensions": {}
            }))
            .into_response()
        }
        _ => not_found("node"),
    }
}

async fn delete_node(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => server_error(StatusCode::CONFLICT, "node still has relationships"),
        "3" => StatusCode::NO_CONTENT.into_response(),
        _ => not_found("node"),
    }
}

async fn node_properties(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!({"name": "Alice"})).into_response(),
        "2" => Json(json!({"name": "Bob"})).into_response(),
        _ => not_found("node"),
    }
}
