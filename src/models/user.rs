use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
