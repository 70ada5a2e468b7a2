//! News API: articles, comments, users and topics served as JSON over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod format;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::app;
pub use seed::SeedData;
pub use state::AppState;
pub use store::ensure_database_exists;
