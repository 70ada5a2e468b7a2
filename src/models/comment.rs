use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub article_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new comment; the article comes from the path.
#[derive(Clone, Debug)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}
