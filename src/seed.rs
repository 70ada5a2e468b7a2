//! Reference-data seeding from raw JSON files.
//!
//! Raw rows use epoch-millisecond `created_at` values, and comments refer to
//! their article by title (`belongs_to`) and to their author as `created_by`.
//! The formatter reshapes them before insertion.

use crate::error::AppError;
use crate::format::{convert_timestamp_to_date, create_ref, format_comments};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::PgPool;
use std::path::Path;

pub type RawRecord = Map<String, Value>;

#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub topics: Vec<RawRecord>,
    pub users: Vec<RawRecord>,
    pub articles: Vec<RawRecord>,
    pub comments: Vec<RawRecord>,
}

#[derive(Deserialize)]
struct SeedTopic {
    slug: String,
    description: Option<String>,
}

#[derive(Deserialize)]
struct SeedUser {
    username: String,
    name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct SeedArticle {
    title: String,
    body: String,
    topic: String,
    author: String,
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    votes: i32,
}

#[derive(Deserialize)]
struct SeedComment {
    body: String,
    article_id: i32,
    author: String,
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    votes: i32,
}

impl SeedData {
    /// Read `topics.json`, `users.json`, `articles.json` and `comments.json` from `dir`.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        Ok(SeedData {
            topics: read_records(&dir.join("topics.json")).await?,
            users: read_records(&dir.join("users.json")).await?,
            articles: read_records(&dir.join("articles.json")).await?,
            comments: read_records(&dir.join("comments.json")).await?,
        })
    }
}

async fn read_records(path: &Path) -> Result<Vec<RawRecord>, AppError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text).map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))
}

fn typed<T: DeserializeOwned>(record: RawRecord) -> Result<T, AppError> {
    serde_json::from_value(Value::Object(record)).map_err(|e| AppError::Seed(e.to_string()))
}

/// Replace all data with `data` in one transaction. Identities restart, so the
/// first seeded article is `article_id` 1 and likewise for comments.
pub async fn run(pool: &PgPool, data: &SeedData) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("TRUNCATE comments, articles, users, topics RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;

    for record in &data.topics {
        let topic: SeedTopic = typed(record.clone())?;
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(topic.slug)
            .bind(topic.description)
            .execute(&mut *tx)
            .await?;
    }

    for record in &data.users {
        let user: SeedUser = typed(record.clone())?;
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(user.username)
            .bind(user.name)
            .bind(user.avatar_url)
            .execute(&mut *tx)
            .await?;
    }

    let mut inserted_articles = Vec::with_capacity(data.articles.len());
    for record in &data.articles {
        let article: SeedArticle = typed(convert_timestamp_to_date(record))?;
        let (article_id, title): (i32, String) = sqlx::query_as(
            "INSERT INTO articles (title, body, topic, author, created_at, votes) \
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), $6) RETURNING article_id, title",
        )
        .bind(article.title)
        .bind(article.body)
        .bind(article.topic)
        .bind(article.author)
        .bind(article.created_at)
        .bind(article.votes)
        .fetch_one(&mut *tx)
        .await?;
        let mut row = RawRecord::new();
        row.insert("article_id".into(), Value::from(article_id));
        row.insert("title".into(), Value::from(title));
        inserted_articles.push(row);
    }

    let article_ref = create_ref(&inserted_articles, "title", "article_id");
    for record in format_comments(&data.comments, &article_ref) {
        let comment: SeedComment = typed(record)?;
        sqlx::query(
            "INSERT INTO comments (body, article_id, author, created_at, votes) \
             VALUES ($1, $2, $3, COALESCE($4, NOW()), $5)",
        )
        .bind(comment.body)
        .bind(comment.article_id)
        .bind(comment.author)
        .bind(comment.created_at)
        .bind(comment.votes)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "database seeded"
    );
    Ok(())
}
