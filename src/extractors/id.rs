//! Numeric path ids (`:article_id`, `:comment_id`).

use crate::error::AppError;
use crate::service::validation::parse_id;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The single numeric id in the matched path. A non-integer id is a 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e.body_text(), "rejected path");
                AppError::bad_request()
            })?;
        parse_id(&raw).map(ResourceId)
    }
}
