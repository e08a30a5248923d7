//! Storage layer - database entities, repositories and connection bootstrap

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

/// Lifetime and idle timeout for the single in-memory SQLite connection.
/// Recycling that connection would drop the database with it.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Pool options for `cfg`.
///
/// In-memory SQLite databases exist per connection, so their pool is
/// pinned to a single connection that is never recycled.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.effective_max_connections())
        .min_connections(1)
        .sqlx_logging(cfg.log_statements);

    if cfg.is_sqlite_memory() {
        opts.max_lifetime(IN_MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME);
    }
    opts
}

/// Opens the connection pool described by `cfg`.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg))
        .await
        .with_context(|| format!("connect to database {}", cfg.redacted_url()))?;

    tracing::info!(
        backend = ?db.get_database_backend(),
        max_connections = cfg.effective_max_connections(),
        "Employee database connected"
    );
    Ok(db)
}

/// Applies all pending employee schema migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    migrations::Migrator::up(db, None)
        .await
        .context("apply employee migrations")?;
    tracing::info!("Employee service migrations completed");
    Ok(())
}
