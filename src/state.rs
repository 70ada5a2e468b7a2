//! Shared application state for all routes.

use crate::config::ServerConfig;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once at startup and handed to every service call.
    pub pool: PgPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: ServerConfig) -> Self {
        AppState {
            pool,
            config: Arc::new(config),
        }
    }
}
