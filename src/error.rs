//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message used for every request-shape failure (bad ids, missing fields, bad bodies).
pub const BAD_REQUEST: &str = "Bad Request";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("migration: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("seed: {0}")]
    Seed(String),
}

impl AppError {
    pub fn bad_request() -> Self {
        AppError::BadRequest(BAD_REQUEST.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        AppError::bad_request()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected query string");
        AppError::bad_request()
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string()),
            AppError::Db(e) => classify_sqlx_error(&e),
            other => {
                tracing::error!(error = %other, "internal error");
                internal()
            }
        };
        (status, Json(ErrorBody { msg })).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
}

/// Postgres SQLSTATE codes that are caused by the request rather than the server.
///
/// - `23503` foreign_key_violation: a referenced topic, user or article does not exist
/// - class `22` data exceptions (`22P02` invalid_text_representation, `22001` string too
///   long, `22003` numeric out of range, `22021` bad byte sequence), `23502`
///   not_null_violation, `42703` undefined_column: the request carried a malformed value
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            Some(code) if is_bad_input(code) => (StatusCode::BAD_REQUEST, BAD_REQUEST.to_string()),
            _ => {
                tracing::error!(error = %db_err, "database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "database error");
            internal()
        }
    }
}

fn is_bad_input(code: &str) -> bool {
    code.starts_with("22") || matches!(code, "23502" | "42703")
}
