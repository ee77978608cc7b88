//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Missing or unparseable values fall back
//! to defaults, except `LISTEN_ADDR` which must parse when set.

use std::net::SocketAddr;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};

use crate::persistence::PoolSettings;
use crate::persistence::seed::SeedOptions;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// SQLite URL of the racing database.
    pub racing_database_url: String,

    /// SQLite URL of the sports database.
    pub sports_database_url: String,

    /// Maximum number of connections in each pool.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Number of races written on first start.
    pub seed_race_count: u32,

    /// Number of events written on first start.
    pub seed_event_count: u32,

    /// Offset, in minutes east of UTC, that seeded start times are written in.
    pub seed_utc_offset_minutes: i32,

    /// Fixed RNG seed for reproducible seed data.
    pub seed_rng_seed: Option<u64>,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            racing_database_url: "sqlite://racing.db".to_string(),
            sports_database_url: "sqlite://sports.db".to_string(),
            database_max_connections: 5,
            database_connect_timeout_secs: 5,
            request_timeout_secs: 10,
            seed_race_count: 100,
            seed_event_count: 100,
            seed_utc_offset_minutes: 0,
            seed_rng_seed: None,
            log_json: false,
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        Ok(Self {
            listen_addr,
            racing_database_url: std::env::var("RACING_DATABASE_URL")
                .unwrap_or(defaults.racing_database_url),
            sports_database_url: std::env::var("SPORTS_DATABASE_URL")
                .unwrap_or(defaults.sports_database_url),
            database_max_connections: parse_env(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            ),
            database_connect_timeout_secs: parse_env(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                defaults.database_connect_timeout_secs,
            ),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            seed_race_count: parse_env("SEED_RACE_COUNT", defaults.seed_race_count),
            seed_event_count: parse_env("SEED_EVENT_COUNT", defaults.seed_event_count),
            seed_utc_offset_minutes: parse_env(
                "SEED_UTC_OFFSET_MINUTES",
                defaults.seed_utc_offset_minutes,
            ),
            seed_rng_seed: std::env::var("SEED_RNG_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
            log_json: std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }

    /// Pool sizing shared by both databases.
    #[must_use]
    pub const fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.database_max_connections,
            acquire_timeout: Duration::from_secs(self.database_connect_timeout_secs),
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Seed generation options for `count` rows.
    ///
    /// An out-of-range `seed_utc_offset_minutes` falls back to UTC.
    #[must_use]
    pub fn seed_options(&self, count: u32) -> SeedOptions {
        let source_offset = self
            .seed_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        SeedOptions {
            count,
            source_offset,
            rng_seed: self.seed_rng_seed,
            ..SeedOptions::default()
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
