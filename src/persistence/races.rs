//! Race repository: filtered, sorted listing and single-race lookup.
//!
//! Rows are materialized into [`Race`] values with their status derived
//! from the repository's [`Clock`], read once per row.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use sqlx::SqlitePool;

use super::init_guard::InitGuard;
use super::predicate::{SqlArg, compile_race_filter};
use super::queries;
use super::seed::{self, SeedRace};
use super::timestamp::{self, TimestampError};
use crate::domain::{Clock, ListRacesFilter, Race, RaceStatus, sort_by_start_time};
use crate::error::GatewayError;

/// Raw `races` row in [`queries::RACES_LIST`] column order.
type RaceRow = (i64, i64, String, i64, bool, String);

/// Read access to races.
#[async_trait]
pub trait RacesRepository: Send + Sync + fmt::Debug {
    /// Seeds the store. Runs the seed exactly once; every call returns the
    /// outcome of that single run.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Initialization`] if seeding failed, now or
    /// on an earlier call.
    async fn init(&self) -> Result<(), GatewayError>;

    /// Lists races matching `filter`, sorted by advertised start time.
    ///
    /// `None` applies no restriction and sorts descending.
    ///
    /// # Errors
    ///
    /// Returns a query, row decode, or timestamp conversion error. No
    /// partial result is returned.
    async fn list(&self, filter: Option<&ListRacesFilter>) -> Result<Vec<Race>, GatewayError>;

    /// Fetches one race by id. A missing race is `Ok(None)`.
    ///
    /// A row whose start time cannot be converted is also reported as
    /// `Ok(None)`, unlike [`RacesRepository::list`] which fails on it.
    ///
    /// # Errors
    ///
    /// Returns a query or row decode error.
    async fn get(&self, id: i64) -> Result<Option<Race>, GatewayError>;
}

/// SQLite-backed [`RacesRepository`].
#[derive(Debug)]
pub struct SqliteRacesRepo {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
    seed: Vec<SeedRace>,
    init: InitGuard,
}

impl SqliteRacesRepo {
    /// Creates a repository that will write `seed` on first [`init`].
    ///
    /// [`init`]: RacesRepository::init
    #[must_use]
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>, seed: Vec<SeedRace>) -> Self {
        Self {
            pool,
            clock,
            seed,
            init: InitGuard::new(),
        }
    }
}

fn materialize(row: RaceRow, now: DateTime<Utc>) -> Result<Race, TimestampError> {
    let (id, meeting_id, name, number, visible, raw_start) = row;
    let advertised_start_time = timestamp::parse_stored(&raw_start)?;
    Ok(Race {
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time,
        status: RaceStatus::at(advertised_start_time, now),
    })
}

#[async_trait]
impl RacesRepository for SqliteRacesRepo {
    async fn init(&self) -> Result<(), GatewayError> {
        self.init
            .run(|| async {
                seed::seed_races(&self.pool, &self.seed)
                    .await
                    .map_err(|e| GatewayError::Initialization(e.to_string()))
            })
            .await
    }

    async fn list(&self, filter: Option<&ListRacesFilter>) -> Result<Vec<Race>, GatewayError> {
        let (sql, args) = compile_race_filter(filter).into_query(queries::RACES_LIST);

        let mut query = sqlx::query_as::<_, RaceRow>(&sql);
        for arg in args {
            query = match arg {
                SqlArg::Integer(value) => query.bind(value),
                SqlArg::Boolean(value) => query.bind(value),
            };
        }

        let mut rows = query.fetch(&self.pool);
        let mut races = Vec::new();
        while let Some(row) = rows.try_next().await? {
            races.push(materialize(row, self.clock.now())?);
        }

        let ascending = filter.is_some_and(|f| f.order_by_ascending);
        sort_by_start_time(&mut races, ascending);

        tracing::debug!(count = races.len(), ascending, "listed races");
        Ok(races)
    }

    async fn get(&self, id: i64) -> Result<Option<Race>, GatewayError> {
        let sql = queries::race_by_id();
        let row = sqlx::query_as::<_, RaceRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        match materialize(row, self.clock.now()) {
            Ok(race) => Ok(Some(race)),
            Err(err) => {
                tracing::warn!(race_id = id, error = %err, "start time not convertible, reporting race as absent");
                Ok(None)
            }
        }
    }
}
