//! Persistence layer: SQLite-backed race and event repositories.
//!
//! Provides the [`RacesRepository`] and [`EventsRepository`] traits and
//! their `sqlx::SqlitePool` implementations, together with the pieces
//! they are built from: filter-to-predicate compilation, stored timestamp
//! conversion, one-shot initialization, schema, and seed data.

pub mod events;
pub mod init_guard;
pub mod predicate;
pub mod queries;
pub mod races;
pub mod schema;
pub mod seed;
pub mod timestamp;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use events::{EventsRepository, SqliteEventsRepo};
pub use init_guard::InitGuard;
pub use races::{RacesRepository, SqliteRacesRepo};

use crate::error::GatewayError;

/// Connection pool sizing for [`connect_pool`].
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    /// Maximum number of open connections.
    pub max_connections: u32,
    /// How long to wait for a free connection.
    pub acquire_timeout: Duration,
}

/// Opens a SQLite pool for `url`, creating the database file if needed.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if the URL is invalid or the
/// database cannot be opened.
pub async fn connect_pool(url: &str, settings: PoolSettings) -> Result<SqlitePool, GatewayError> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await?;
    tracing::info!(url, max_connections = settings.max_connections, "database pool ready");
    Ok(pool)
}

/// Single-connection in-memory pool that keeps its database alive for the
/// whole test.
#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) async fn test_pool() -> SqlitePool {
    let Ok(pool) = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
    else {
        panic!("in-memory sqlite pool");
    };
    pool
}
