//! Database bootstrap: create the target database if needed and build the shared pool.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Build the connection pool handed to every service. Owned by `main` and closed on shutdown.
pub async fn connect(config: &ServerConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Round-trip to the database; used by the readiness probe.
pub async fn ping(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)?;
    let mut conn = opts.connect().await?;
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Split `postgres://host/name?opts` into an admin URL on the `postgres` database and `name`.
fn split_database_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: url.to_string(),
        })?;
    let (base, rest) = url.split_at(path_start);
    let (db_name, query) = match rest.split_once('?') {
        Some((name, q)) => (name, format!("?{q}")),
        None => (rest, String::new()),
    };
    Ok((format!("{base}postgres{query}"), db_name.trim().to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_and_keeps_options() {
        let (admin, name) = split_database_url("postgres://user:pw@localhost:5432/nc_news?sslmode=disable").unwrap();
        assert_eq!(name, "nc_news");
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres?sslmode=disable");
    }

    #[test]
    fn url_without_path_is_rejected() {
        assert!(split_database_url("postgres://localhost").is_err());
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("nc\"news"), "\"nc\"\"news\"");
    }
}
