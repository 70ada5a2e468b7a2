//! Article handlers: list, create, read, vote, delete.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiQuery, ResourceId};
use crate::models::NewArticle;
use crate::response;
use crate::service::validation::{check_sort, required, vote_delta};
use crate::service::{ArticleFilter, ArticleService};
use crate::sql::ARTICLES;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub author: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostArticleBody {
    #[serde(alias = "author")]
    pub username: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VoteBody {
    pub inc_votes: Option<Value>,
}

pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> Result<impl IntoResponse, AppError> {
    let sort = check_sort(params.sort_by.as_deref(), params.order.as_deref(), &ARTICLES)?;
    let filter = ArticleFilter {
        sort,
        author: params.author,
        topic: params.topic,
    };
    let articles = ArticleService::list(&state.pool, &filter).await?;
    Ok(response::ok("articles", articles))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PostArticleBody>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewArticle {
        author: required(body.username)?,
        title: required(body.title)?,
        body: required(body.body)?,
        topic: required(body.topic)?,
    };
    let created = ArticleService::create(&state.pool, &article).await?;
    Ok(response::created("article", created))
}

pub async fn read(
    State(state): State<AppState>,
    ResourceId(article_id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::find(&state.pool, article_id).await?;
    Ok(response::ok("article", article))
}

pub async fn update_votes(
    State(state): State<AppState>,
    ResourceId(article_id): ResourceId,
    ApiJson(body): ApiJson<VoteBody>,
) -> Result<impl IntoResponse, AppError> {
    let delta = vote_delta(body.inc_votes.as_ref())?;
    let article = ArticleService::increment_votes(&state.pool, article_id, delta).await?;
    Ok(response::ok("article", article))
}

pub async fn delete(
    State(state): State<AppState>,
    ResourceId(article_id): ResourceId,
) -> Result<StatusCode, AppError> {
    ArticleService::delete(&state.pool, article_id).await?;
    Ok(response::no_content())
}
