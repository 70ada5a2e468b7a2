//! HTTP handlers: decode the request, call one service, wrap the result in its envelope.

pub mod articles;
pub mod comments;
pub mod fallback;
pub mod topics;
pub mod users;

use axum::Json;
use serde_json::{json, Value};

/// GET /api: liveness of the API namespace.
pub async fn api_root() -> Json<Value> {
    Json(json!({ "ok": true }))
}
