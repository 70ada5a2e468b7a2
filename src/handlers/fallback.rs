//! Handlers for requests no resource route accepts.

use crate::error::AppError;

/// Registered as the method fallback on every path.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn route_not_found() -> AppError {
    AppError::not_found("Route Not Found")
}
