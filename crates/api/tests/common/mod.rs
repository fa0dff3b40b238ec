#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use brushquote_api::config::ServerConfig;
use brushquote_api::router::build_app_router;
use brushquote_api::state::{AppState, EngineSettings};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        ..ServerConfig::default()
    }
}

/// Build the full application router with the production middleware stack
/// and default engine settings.
pub fn build_test_app() -> Router {
    build_test_app_with(AppState::new(test_config(), EngineSettings::default()))
}

/// Build the router over an existing state, so a test can issue several
/// requests against shared settings.
pub fn build_test_app_with(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

pub fn test_state() -> AppState {
    AppState::new(test_config(), EngineSettings::default())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
