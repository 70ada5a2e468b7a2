//! Apply the schema: topics, users, articles and comments, with comments cascading
//! on article delete. Migration files live in `migrations/` and are embedded at build time.

use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run pending migrations. Already-applied versions are skipped.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(migrations = MIGRATOR.iter().count(), "schema up to date");
    Ok(())
}
