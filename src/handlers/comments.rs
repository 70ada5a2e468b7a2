//! Comment handlers, both nested under an article and addressed by id.

use super::articles::VoteBody;
use crate::error::AppError;
use crate::extractors::{ApiJson, ApiQuery, ResourceId};
use crate::models::NewComment;
use crate::response;
use crate::service::validation::{check_sort, required, vote_delta};
use crate::service::{CommentFilter, CommentService};
use crate::sql::COMMENTS;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CommentListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostCommentBody {
    pub username: Option<String>,
    pub body: Option<String>,
}

pub async fn list_for_article(
    State(state): State<AppState>,
    ResourceId(article_id): ResourceId,
    ApiQuery(params): ApiQuery<CommentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let sort = check_sort(params.sort_by.as_deref(), params.order.as_deref(), &COMMENTS)?;
    let comments = CommentService::list_for_article(&state.pool, article_id, &CommentFilter { sort }).await?;
    Ok(response::ok("comments", comments))
}

pub async fn create(
    State(state): State<AppState>,
    ResourceId(article_id): ResourceId,
    ApiJson(body): ApiJson<PostCommentBody>,
) -> Result<impl IntoResponse, AppError> {
    let comment = NewComment {
        author: required(body.username)?,
        body: required(body.body)?,
    };
    let created = CommentService::create(&state.pool, article_id, &comment).await?;
    Ok(response::created("comment", created))
}

pub async fn update_votes(
    State(state): State<AppState>,
    ResourceId(comment_id): ResourceId,
    ApiJson(body): ApiJson<VoteBody>,
) -> Result<impl IntoResponse, AppError> {
    let delta = vote_delta(body.inc_votes.as_ref())?;
    let comment = CommentService::increment_votes(&state.pool, comment_id, delta).await?;
    Ok(response::ok("comment", comment))
}

pub async fn delete(
    State(state): State<AppState>,
    ResourceId(comment_id): ResourceId,
) -> Result<StatusCode, AppError> {
    CommentService::delete(&state.pool, comment_id).await?;
    Ok(response::no_content())
}
