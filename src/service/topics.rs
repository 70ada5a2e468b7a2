use super::query::fetch_all;
use crate::error::AppError;
use crate::models::Topic;
use crate::sql::{self, TOPICS};
use sqlx::PgPool;

pub struct TopicService;

impl TopicService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, AppError> {
        fetch_all(pool, sql::select_all(&TOPICS)).await
    }
}
