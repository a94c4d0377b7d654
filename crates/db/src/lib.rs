//! Persistence layer for the ordering system.
//!
//! - [`schema`] -- idempotent table creation.
//! - [`repositories`] -- one zero-sized repo per table group.
//! - [`accounts`] -- credential/session logic and role-specific operations.
//! - [`seed`] -- starter data for a fresh database.

use std::sync::Arc;

use aio_core::settings::{Secrets, Settings};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod accounts;
pub mod error;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Connection pool plus the settings every operation needs.
///
/// Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: DbPool,
    settings: Arc<Settings>,
}

impl Store {
    /// Open a pool sized from `settings` using the given database login.
    pub async fn connect(settings: Settings, secrets: &Secrets) -> Result<Self, sqlx::Error> {
        let pool_options = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout());
        let connect_options = connect_options(&settings, secrets);
        Self::connect_with(pool_options, connect_options, settings).await
    }

    /// Open a pool from caller-supplied options.
    ///
    /// Every connection gets `search_path` set to the configured schema, so
    /// queries use bare table names.
    pub async fn connect_with(
        pool_options: PgPoolOptions,
        connect_options: PgConnectOptions,
        settings: Settings,
    ) -> Result<Self, sqlx::Error> {
        let connect_options = connect_options.options([("search_path", settings.schema.as_str())]);
        let pool = pool_options.connect_with(connect_options).await?;
        tracing::debug!(schema = %settings.schema, "Database pool opened");
        Ok(Self {
            pool,
            settings: Arc::new(settings),
        })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create the schema and every table that does not exist yet.
    pub async fn create_all(&self) -> Result<(), sqlx::Error> {
        schema::create_all(&self.pool, &self.settings).await
    }
}

/// Build connection options from settings and secrets.
pub fn connect_options(settings: &Settings, secrets: &Secrets) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .database(&settings.dbname)
        .username(&secrets.user)
        .password(&secrets.password)
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
