//! Shared setup for router and adapter tests.

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, StatusCode, header};
use tower::ServiceExt;

use crate::config::{Config, StoreBackend};
use crate::routes;
use crate::state::AppState;
use crate::store::{ItemStore, MemoryStore};

pub fn test_config() -> Config {
    Config {
        store_backend: StoreBackend::Memory,
        dynamo_table: None,
        aws_endpoint_url: None,
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
        lambda_runtime: false,
    }
}

pub fn test_state(store: Arc<dyn ItemStore>) -> AppState {
    AppState {
        store,
        config: Arc::new(test_config()),
    }
}

/// Router over a fresh in-memory table, plus a handle to inspect it
pub fn setup_test_app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let app = routes::app(test_state(Arc::new(store.clone())));
    (app, store)
}

/// Send one request through the router and collect status, content type
/// and body text
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Option<String>, String) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let request = request
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}
