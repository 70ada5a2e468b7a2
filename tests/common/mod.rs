#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use news_api::{app, seed, AppState, SeedData, ServerConfig};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use tower::ServiceExt;

pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).unwrap()
}

/// Router over a pool that never connects; enough for requests rejected before any query.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/news_api_offline")
        .unwrap();
    app(AppState::new(pool, test_config()))
}

/// Router over `pool` after loading the bundled test data into it.
pub async fn seeded_app(pool: PgPool) -> Router {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let data = SeedData::load(dir).await.unwrap();
    seed::run(&pool, &data).await.unwrap();
    app(AppState::new(pool, test_config()))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
