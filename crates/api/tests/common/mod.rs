//! Shared helpers for API integration tests.
//!
//! Mirrors the router construction in `main.rs` (via `build_app_router`) so
//! tests exercise the same middleware stack that production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use lotwatch_api::config::ServerConfig;
use lotwatch_api::router::build_app_router;
use lotwatch_api::state::AppState;
use lotwatch_core::config::EngineConfig;
use lotwatch_db::models::lot::CreateLot;
use lotwatch_db::repositories::LotRepo;

/// Build a test `ServerConfig`. `api_key: None` leaves the write path open.
pub fn test_config(api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        engine: EngineConfig {
            cooldown_window_ms: 1200,
            api_key: api_key.map(str::to_string),
        },
    }
}

/// Build the application router with the write path open.
#[allow(dead_code)]
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, None)
}

/// Build the application router with an optional shared secret configured.
pub fn build_test_app_with(pool: PgPool, api_key: Option<&str>) -> Router {
    let config = test_config(api_key);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed one lot (lots are provisioned out-of-band in production).
#[allow(dead_code)]
pub async fn seed_lot(pool: &PgPool, id: &str, capacity: Option<i64>) {
    LotRepo::create(
        pool,
        &CreateLot {
            id: id.into(),
            name: format!("Lot {id}"),
            capacity,
            permit: "Visitor".into(),
            description: "Test lot".into(),
            latitude: Some(44.97),
            longitude: Some(-93.23),
        },
    )
    .await
    .expect("seed lot");
}

/// Issue a GET request against the app.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST with a JSON body, optionally carrying an `x-api-key` header.
#[allow(dead_code)]
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    api_key: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST with a raw (possibly malformed) body.
#[allow(dead_code)]
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
