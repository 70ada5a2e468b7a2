use crate::error::AppError;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

/// `axum::Json` with a 400 `{msg: "Bad Request"}` rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with a 400 `{msg: "Bad Request"}` rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
