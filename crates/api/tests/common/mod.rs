use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use matserve_api::config::ServerConfig;
use matserve_api::router::build_app_router;
use matserve_api::state::AppState;
use matserve_store::ResultLog;

/// Build a test `ServerConfig` pointing the result log at the given file.
pub fn test_config(results_file: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        results_file: results_file.to_path_buf(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, writing
/// results to the given file.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(results_file: &Path) -> Router {
    let config = test_config(results_file);

    let state = AppState {
        log: Arc::new(ResultLog::new(results_file)),
    };

    build_app_router(state, &config)
}

/// Send a POST with the given raw body (sent as-is, no JSON encoding).
pub async fn post(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
