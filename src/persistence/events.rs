//! Event repository: unfiltered listing in store order.

use std::fmt;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use sqlx::SqlitePool;

use super::init_guard::InitGuard;
use super::queries;
use super::seed::{self, SeedEvent};
use super::timestamp;
use crate::domain::Event;
use crate::error::GatewayError;

/// Raw `events` row in [`queries::EVENTS_LIST`] column order.
type EventRow = (i64, String, String);

/// Read access to sporting events.
#[async_trait]
pub trait EventsRepository: Send + Sync + fmt::Debug {
    /// Seeds the store. Same one-shot contract as
    /// [`RacesRepository::init`](super::RacesRepository::init).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Initialization`] if seeding failed, now or
    /// on an earlier call.
    async fn init(&self) -> Result<(), GatewayError>;

    /// Lists every event in store order.
    ///
    /// # Errors
    ///
    /// Returns a query, row decode, or timestamp conversion error. No
    /// partial result is returned.
    async fn list(&self) -> Result<Vec<Event>, GatewayError>;
}

/// SQLite-backed [`EventsRepository`].
#[derive(Debug)]
pub struct SqliteEventsRepo {
    pool: SqlitePool,
    seed: Vec<SeedEvent>,
    init: InitGuard,
}

impl SqliteEventsRepo {
    /// Creates a repository that will write `seed` on first
    /// [`init`](EventsRepository::init).
    #[must_use]
    pub fn new(pool: SqlitePool, seed: Vec<SeedEvent>) -> Self {
        Self {
            pool,
            seed,
            init: InitGuard::new(),
        }
    }
}

#[async_trait]
impl EventsRepository for SqliteEventsRepo {
    async fn init(&self) -> Result<(), GatewayError> {
        self.init
            .run(|| async {
                seed::seed_events(&self.pool, &self.seed)
                    .await
                    .map_err(|e| GatewayError::Initialization(e.to_string()))
            })
            .await
    }

    async fn list(&self) -> Result<Vec<Event>, GatewayError> {
        let mut rows = sqlx::query_as::<_, EventRow>(queries::EVENTS_LIST).fetch(&self.pool);

        let mut events = Vec::new();
        while let Some((id, name, raw_start)) = rows.try_next().await? {
            events.push(Event {
                id,
                name,
                advertised_start_time: timestamp::parse_stored(&raw_start)?,
            });
        }

        tracing::debug!(count = events.len(), "listed events");
        Ok(events)
    }
}
