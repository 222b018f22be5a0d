//! Common test utilities

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use accounts_api::api::{create_router, AppState};
use accounts_api::store::memory::MemoryStore;

pub const VALID_DOCUMENT: &str = "11222333000181";

/// Router over fresh in-memory stores.
pub fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), store);
    create_router().with_state(state)
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build failed");
    app.clone().oneshot(request).await.expect("request failed")
}

pub async fn send(app: &Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request build failed");
    app.clone().oneshot(request).await.expect("request failed")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

/// Create a user and return its assigned id.
pub async fn seed_user(app: &Router, name: &str, document: &str, email: &str) -> i64 {
    let response = send_json(
        app,
        "POST",
        "/user",
        serde_json::json!({ "name": name, "document": document, "email": email }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "user creation failed");
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("created user has no id")
}
