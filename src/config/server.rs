//! Server configuration loaded from environment variables.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

/// All fields have defaults suitable for local development.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    /// Largest accepted request body, in bytes.
    pub body_limit_bytes: usize,
    /// Directory holding `topics.json`, `users.json`, `articles.json` and `comments.json`.
    /// When set, the database is reseeded from it at startup.
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// | Env Var              | Default                        |
    /// |----------------------|--------------------------------|
    /// | `HOST`               | `0.0.0.0`                      |
    /// | `PORT`               | `9090`                         |
    /// | `DATABASE_URL`       | `postgres://localhost/nc_news` |
    /// | `DB_MAX_CONNECTIONS` | `5`                            |
    /// | `BODY_LIMIT_BYTES`   | `65536`                        |
    /// | `SEED_PATH`          | unset                          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 9090)?,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/nc_news".into()),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", 64 * 1024)?,
            seed_path: lookup("SEED_PATH").filter(|s| !s.trim().is_empty()).map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
