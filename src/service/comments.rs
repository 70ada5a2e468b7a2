//! Comment queries and mutations.

use super::articles::ArticleService;
use super::query::{execute, fetch_all, fetch_optional};
use crate::error::AppError;
use crate::models::{Comment, NewComment};
use crate::sql::{self, Sort, COMMENTS};
use sqlx::PgPool;

pub const COMMENT_NOT_FOUND: &str = "comment not found";

#[derive(Clone, Copy, Debug)]
pub struct CommentFilter {
    pub sort: Sort,
}

pub struct CommentService;

impl CommentService {
    /// Comments of one article. An article with no comments gives `[]`; a missing article is a 404.
    pub async fn list_for_article(
        pool: &PgPool,
        article_id: i32,
        filter: &CommentFilter,
    ) -> Result<Vec<Comment>, AppError> {
        let comments: Vec<Comment> = fetch_all(pool, sql::select_comments_for_article(article_id, filter.sort)).await?;
        if comments.is_empty() && !ArticleService::exists(pool, article_id).await? {
            return Err(AppError::not_found("Article Not Found"));
        }
        Ok(comments)
    }

    /// Insert a comment. A missing article or author is a foreign-key violation (404).
    pub async fn create(pool: &PgPool, article_id: i32, comment: &NewComment) -> Result<Comment, AppError> {
        let created: Comment = fetch_optional(pool, sql::insert_comment(article_id, comment))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(comment_id = created.comment_id, article_id, "comment created");
        Ok(created)
    }

    pub async fn increment_votes(pool: &PgPool, id: i32, delta: i32) -> Result<Comment, AppError> {
        let comment: Comment = fetch_optional(pool, sql::increment_votes(&COMMENTS, id, delta))
            .await?
            .ok_or_else(|| AppError::not_found(COMMENT_NOT_FOUND))?;
        tracing::info!(comment_id = id, delta, votes = comment.votes, "comment votes updated");
        Ok(comment)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        if execute(pool, sql::delete_by_id(&COMMENTS, id)).await? == 0 {
            return Err(AppError::not_found(COMMENT_NOT_FOUND));
        }
        tracing::info!(comment_id = id, "comment deleted");
        Ok(())
    }
}
