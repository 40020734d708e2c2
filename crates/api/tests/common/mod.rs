#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use marquee_api::config::{ServerConfig, StoreBackend};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_db::Repositories;
use marquee_store::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and dev tools enabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        opensearch_url: "http://localhost:9200".to_string(),
        dev_tools_enabled: true,
    }
}

/// A router over a fresh in-memory store, plus the store itself so tests
/// can seed documents or simulate an outage.
///
/// The router is built by the same function `main.rs` uses, so tests run the
/// production middleware stack. Clone the router for each request; all
/// clones share the store.
pub async fn build_test_app_with(config: ServerConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let repos = Repositories::bootstrap(store.clone()).await.unwrap();

    let state = AppState {
        repos: Arc::new(repos),
        store: store.clone(),
    };

    (build_app_router(state, &config), store)
}

pub async fn build_test_app() -> Router {
    build_test_app_with(test_config()).await.0
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Read the whole response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a movie through the API and return its id.
pub async fn create_movie(app: &Router, body: Value) -> i64 {
    let response = post_json(app.clone(), "/api/v1/movies", body).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a user through the API and return its id.
pub async fn create_user(app: &Router, name: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/users",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}
