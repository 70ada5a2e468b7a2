//! Router behaviour that is decided before any query runs. No database needed.

mod common;

use axum::http::{Method, StatusCode};
use common::{get, offline_app, patch_json, post_json, send};
use serde_json::json;

#[tokio::test]
async fn api_root_reports_ok() {
    let app = offline_app();
    let (status, body) = get(&app, "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn health_and_version_answer_without_a_database() {
    let app = offline_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "news-api");
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let app = offline_app();
    for uri in ["/not-a-route", "/api/not-a-route", "/api/articles/1/nope"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["msg"], "Route Not Found");
    }
}

#[tokio::test]
async fn unsupported_methods_are_405() {
    let app = offline_app();
    let cases = [
        (Method::PUT, "/api"),
        (Method::DELETE, "/api/topics"),
        (Method::PUT, "/api/articles"),
        (Method::PUT, "/api/articles/1"),
        (Method::PUT, "/api/articles/1/comments"),
        (Method::GET, "/api/comments/1"),
        (Method::POST, "/api/users"),
        (Method::DELETE, "/api/users/butter_bridge"),
    ];
    for (method, uri) in cases {
        let (status, body) = send(&app, method.clone(), uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(body["msg"], "Method Not Allowed");
    }
}

#[tokio::test]
async fn invalid_order_has_its_own_message() {
    let app = offline_app();
    let (status, body) = get(&app, "/api/articles?order=not-asc-or-desc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request: Invalid order query");

    let (status, body) = get(&app, "/api/articles/1/comments?order=sideways").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request: Invalid order query");
}

#[tokio::test]
async fn invalid_sort_by_is_400() {
    let app = offline_app();
    for uri in [
        "/api/articles?sort_by=not-a-column",
        "/api/articles?sort_by=body",
        "/api/articles/1/comments?sort_by=not-a-column",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["msg"], "Bad Request");
    }
}

#[tokio::test]
async fn non_numeric_ids_are_400() {
    let app = offline_app();
    let (status, body) = get(&app, "/api/articles/not-a-valid-id").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");

    let (status, _) = send(&app, Method::DELETE, "/api/articles/onetwothree", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = patch_json(&app, "/api/comments/one", json!({ "inc_votes": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::DELETE, "/api/comments/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");
}

#[tokio::test]
async fn signed_or_padded_ids_are_400() {
    let app = offline_app();
    for uri in ["/api/articles/+1", "/api/articles/%201", "/api/articles/1%20"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["msg"], "Bad Request");
    }
}

#[tokio::test]
async fn api_root_with_trailing_slash_is_not_routed() {
    let app = offline_app();
    let (status, body) = get(&app, "/api/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Route Not Found");
}

#[tokio::test]
async fn non_integer_inc_votes_is_400() {
    let app = offline_app();
    for inc_votes in [json!("not a number"), json!(1.5), json!([1]), json!(1_i64 << 40)] {
        let (status, body) = patch_json(&app, "/api/articles/1", json!({ "inc_votes": inc_votes })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Bad Request");
    }
}

#[tokio::test]
async fn missing_fields_are_400() {
    let app = offline_app();
    let (status, body) = post_json(&app, "/api/articles", json!({ "title": "no author" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");

    let (status, _) = post_json(&app, "/api/articles/1/comments", json!({ "username": "butter_bridge" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, "/api/articles/1/comments", json!({ "body": "anonymous" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = offline_app();
    let (status, body) = send(&app, Method::POST, "/api/articles", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");
}
