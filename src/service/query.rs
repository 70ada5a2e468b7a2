//! Executes built queries against any Postgres executor (pool or transaction).

use crate::error::AppError;
use crate::sql::QueryBuf;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgExecutor};

pub(crate) async fn fetch_all<'e, E, T>(executor: E, q: QueryBuf) -> Result<Vec<T>, AppError>
where
    E: PgExecutor<'e>,
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let QueryBuf { sql, params } = q;
    let mut query = sqlx::query_as::<_, T>(&sql);
    for p in params {
        query = query.bind(p);
    }
    Ok(query.fetch_all(executor).await?)
}

pub(crate) async fn fetch_optional<'e, E, T>(executor: E, q: QueryBuf) -> Result<Option<T>, AppError>
where
    E: PgExecutor<'e>,
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let QueryBuf { sql, params } = q;
    let mut query = sqlx::query_as::<_, T>(&sql);
    for p in params {
        query = query.bind(p);
    }
    Ok(query.fetch_optional(executor).await?)
}

pub(crate) async fn fetch_exists<'e, E>(executor: E, q: QueryBuf) -> Result<bool, AppError>
where
    E: PgExecutor<'e>,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let QueryBuf { sql, params } = q;
    let mut query = sqlx::query_scalar::<_, bool>(&sql);
    for p in params {
        query = query.bind(p);
    }
    Ok(query.fetch_one(executor).await?)
}

/// Returns the number of affected rows.
pub(crate) async fn execute<'e, E>(executor: E, q: QueryBuf) -> Result<u64, AppError>
where
    E: PgExecutor<'e>,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
    let QueryBuf { sql, params } = q;
    let mut query = sqlx::query(&sql);
    for p in params {
        query = query.bind(p);
    }
    Ok(query.execute(executor).await?.rows_affected())
}
