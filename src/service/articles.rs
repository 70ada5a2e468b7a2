//! Article queries and mutations.

use super::query::{execute, fetch_all, fetch_exists, fetch_optional};
use crate::error::AppError;
use crate::models::{Article, ArticleDetail, ArticleSummary, NewArticle};
use crate::sql::{self, Sort, ARTICLES, TOPICS, USERS};
use sqlx::PgPool;

pub const ARTICLE_NOT_FOUND: &str = "article_id not found";

/// Validated list query. Unknown authors or topics are resolved here, not by the validator.
#[derive(Clone, Debug)]
pub struct ArticleFilter {
    pub sort: Sort,
    pub author: Option<String>,
    pub topic: Option<String>,
}

pub struct ArticleService;

impl ArticleService {
    /// List articles with their comment counts.
    ///
    /// An empty result is checked against the filters: a filter naming a user or
    /// topic that does not exist is a 404, while an existing one with no
    /// articles yields an empty list.
    pub async fn list(pool: &PgPool, filter: &ArticleFilter) -> Result<Vec<ArticleSummary>, AppError> {
        let mut filters = Vec::new();
        if let Some(author) = &filter.author {
            filters.push(("author", author.clone()));
        }
        if let Some(topic) = &filter.topic {
            filters.push(("topic", topic.clone()));
        }
        let articles: Vec<ArticleSummary> = fetch_all(pool, sql::select_articles(&filters, filter.sort)).await?;
        if articles.is_empty() {
            if let Some(author) = &filter.author {
                if !fetch_exists(pool, sql::exists(&USERS, author.as_str())).await? {
                    return Err(AppError::not_found("User Not Found"));
                }
            }
            if let Some(topic) = &filter.topic {
                if !fetch_exists(pool, sql::exists(&TOPICS, topic.as_str())).await? {
                    return Err(AppError::not_found("Topic Not Found"));
                }
            }
        }
        Ok(articles)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<ArticleDetail, AppError> {
        fetch_optional(pool, sql::select_article_by_id(id))
            .await?
            .ok_or_else(|| AppError::not_found(ARTICLE_NOT_FOUND))
    }

    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        fetch_exists(pool, sql::exists(&ARTICLES, id)).await
    }

    /// Apply a relative vote change; a zero delta just reads the row back.
    pub async fn increment_votes(pool: &PgPool, id: i32, delta: i32) -> Result<Article, AppError> {
        let article: Article = fetch_optional(pool, sql::increment_votes(&ARTICLES, id, delta))
            .await?
            .ok_or_else(|| AppError::not_found(ARTICLE_NOT_FOUND))?;
        tracing::info!(article_id = id, delta, votes = article.votes, "article votes updated");
        Ok(article)
    }

    /// Insert an article. A missing author or topic surfaces as a foreign-key violation (404).
    pub async fn create(pool: &PgPool, article: &NewArticle) -> Result<Article, AppError> {
        let created: Article = fetch_optional(pool, sql::insert_article(article))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(article_id = created.article_id, author = %created.author, "article created");
        Ok(created)
    }

    /// Delete an article; its comments are removed by the cascade.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        let deleted = execute(pool, sql::delete_by_id(&ARTICLES, id)).await?;
        if deleted == 0 {
            return Err(AppError::not_found(ARTICLE_NOT_FOUND));
        }
        tracing::info!(article_id = id, "article deleted");
        Ok(())
    }
}
