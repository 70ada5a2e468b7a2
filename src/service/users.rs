use super::query::{fetch_all, fetch_optional};
use crate::error::AppError;
use crate::models::User;
use crate::sql::{self, USERS};
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        fetch_all(pool, sql::select_all(&USERS)).await
    }

    pub async fn find(pool: &PgPool, username: &str) -> Result<User, AppError> {
        fetch_optional(pool, sql::select_by_key(&USERS, username))
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))
    }
}
