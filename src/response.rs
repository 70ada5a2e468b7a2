//! Response envelope helpers: every success body is a single-key object named after the resource.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::collections::BTreeMap;

pub type Envelope<T> = Json<BTreeMap<&'static str, T>>;

fn envelope<T: Serialize>(key: &'static str, data: T) -> Envelope<T> {
    Json(BTreeMap::from([(key, data)]))
}

/// 200 with `{key: data}`.
pub fn ok<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Envelope<T>) {
    (StatusCode::OK, envelope(key, data))
}

/// 201 with `{key: data}` for a freshly created resource.
pub fn created<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Envelope<T>) {
    (StatusCode::CREATED, envelope(key, data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_keyed_by_resource() {
        let (status, Json(body)) = ok("topics", vec!["cats", "mitch"]);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "topics": ["cats", "mitch"] })
        );
    }

    #[test]
    fn created_uses_201() {
        let (status, _) = created("comment", 1);
        assert_eq!(status, StatusCode::CREATED);
    }
}
