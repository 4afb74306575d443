//! PostgreSQL connection pool.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Errors that can occur while opening the PostgreSQL pool.
#[derive(Debug, Error)]
pub enum PostgresPoolError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Invalid database configuration: {0}")]
    InvalidConfig(#[from] config::ConfigError),
}

/// Shared PostgreSQL connection pool.
///
/// Cloning is cheap; all clones share the same underlying connections.
#[derive(Clone)]
pub struct PostgresPool {
    pool: PgPool,

    /// `user@host:port/name` (for logging purposes)
    target: String,
}

impl PostgresPool {
    /// Open a pool and verify that at least one connection can be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, PostgresPoolError> {
        let options = config.connect_options()?;
        let target = config.display_target();

        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .connect_with(options)
            .await?;

        tracing::info!(
            database = %target,
            pool_size = config.pool_size,
            "PostgreSQL connection pool created"
        );

        Ok(Self { pool, target })
    }

    /// Wrap an already-open pool.
    pub fn from_pool(pool: PgPool, target: impl Into<String>) -> Self {
        Self {
            pool,
            target: target.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Close the pool gracefully.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!(database = %self.target, "PostgreSQL connection pool closed");
    }
}
