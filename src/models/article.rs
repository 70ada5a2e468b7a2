use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored article as returned by insert and vote updates.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// Single-article view: the full row plus the number of comments on it.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct ArticleDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub article: Article,
    pub comment_count: i64,
}

/// List view: no body, with the comment count.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// Validated input for a new article. `author` and `topic` must reference existing rows.
#[derive(Clone, Debug)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
}
