//! Dummy data for the race and event stores.
//!
//! Seeding runs once per repository, from its `init`. Rows are written with
//! `INSERT OR IGNORE` so re-seeding an existing database file leaves the
//! stored rows untouched.

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;

use super::{schema, timestamp};
use crate::error::GatewayError;

const VENUES: [&str; 12] = [
    "Flemington",
    "Randwick",
    "Eagle Farm",
    "Morphettville",
    "Ascot",
    "Caulfield",
    "Rosehill",
    "Doomben",
    "Moonee Valley",
    "Ellerslie",
    "Sandown",
    "Warwick Farm",
];

const RACE_KINDS: [&str; 6] = [
    "Handicap",
    "Maiden Plate",
    "Stakes",
    "Cup",
    "Sprint",
    "Classic",
];

const TEAMS: [&str; 12] = [
    "Lions", "Tigers", "Eagles", "Sharks", "Storm", "Dragons", "Bulldogs", "Panthers", "Raiders",
    "Titans", "Cowboys", "Knights",
];

/// Parameters for generated seed data.
#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    /// Number of rows to generate.
    pub count: u32,
    /// Offset the generated start times are written in.
    pub source_offset: FixedOffset,
    /// Start times fall within this many hours either side of the seeding
    /// instant.
    pub window_hours: i64,
    /// Fixed RNG seed for reproducible data. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            count: 100,
            source_offset: Utc.fix(),
            window_hours: 48,
            rng_seed: None,
        }
    }
}

/// A race row to be written by the seeder.
#[derive(Debug, Clone)]
pub struct SeedRace {
    /// Race identifier.
    pub id: i64,
    /// Meeting identifier.
    pub meeting_id: i64,
    /// Race name.
    pub name: String,
    /// Race number within the meeting.
    pub number: i64,
    /// Visibility flag.
    pub visible: bool,
    /// Start time in its source offset.
    pub advertised_start_time: DateTime<FixedOffset>,
}

/// An event row to be written by the seeder.
#[derive(Debug, Clone)]
pub struct SeedEvent {
    /// Event identifier.
    pub id: i64,
    /// Event name.
    pub name: String,
    /// Start time in its source offset.
    pub advertised_start_time: DateTime<FixedOffset>,
}

fn rng_for(options: &SeedOptions) -> StdRng {
    match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn start_time(rng: &mut StdRng, options: &SeedOptions, now: DateTime<Utc>) -> DateTime<FixedOffset> {
    let window = options.window_hours.saturating_mul(3600).max(0);
    let offset = Duration::seconds(rng.random_range(-window..=window));
    (now + offset).with_timezone(&options.source_offset)
}

/// Generates races with ids `1..=count`, meetings 1–10 and race numbers
/// 1–12, starting around `now`.
#[must_use]
pub fn generate_races(options: &SeedOptions, now: DateTime<Utc>) -> Vec<SeedRace> {
    let mut rng = rng_for(options);
    (1..=i64::from(options.count))
        .map(|id| {
            let venue = VENUES.choose(&mut rng).copied().unwrap_or("Flemington");
            let kind = RACE_KINDS.choose(&mut rng).copied().unwrap_or("Handicap");
            SeedRace {
                id,
                meeting_id: rng.random_range(1..=10),
                name: format!("{venue} {kind}"),
                number: rng.random_range(1..=12),
                visible: rng.random_bool(0.5),
                advertised_start_time: start_time(&mut rng, options, now),
            }
        })
        .collect()
}

/// Generates events with ids `1..=count` named `"Home vs Away"`, starting
/// around `now`.
#[must_use]
pub fn generate_events(options: &SeedOptions, now: DateTime<Utc>) -> Vec<SeedEvent> {
    let mut rng = rng_for(options);
    (1..=i64::from(options.count))
        .map(|id| {
            let mut teams = TEAMS.choose_multiple(&mut rng, 2).copied();
            let home = teams.next().unwrap_or("Home");
            let away = teams.next().unwrap_or("Away");
            SeedEvent {
                id,
                name: format!("{home} vs {away}"),
                advertised_start_time: start_time(&mut rng, options, now),
            }
        })
        .collect()
}

/// Creates the `races` table and writes `races` in one transaction.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if schema creation or any
/// insert fails; nothing is committed in that case.
pub async fn seed_races(pool: &SqlitePool, races: &[SeedRace]) -> Result<(), GatewayError> {
    let mut tx = pool.begin().await?;
    schema::create_races_table(&mut *tx).await?;

    for race in races {
        sqlx::query(
            "INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(race.id)
        .bind(race.meeting_id)
        .bind(&race.name)
        .bind(race.number)
        .bind(race.visible)
        .bind(timestamp::to_stored(race.advertised_start_time))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(rows = races.len(), "seeded races");
    Ok(())
}

/// Creates the `events` table and writes `events` in one transaction.
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] if schema creation or any
/// insert fails; nothing is committed in that case.
pub async fn seed_events(pool: &SqlitePool, events: &[SeedEvent]) -> Result<(), GatewayError> {
    let mut tx = pool.begin().await?;
    schema::create_events_table(&mut *tx).await?;

    for event in events {
        sqlx::query(
            "INSERT OR IGNORE INTO events (id, name, advertised_start_time) VALUES (?, ?, ?)",
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(timestamp::to_stored(event.advertised_start_time))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(rows = events.len(), "seeded events");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::test_pool;

    fn options(count: u32) -> SeedOptions {
        SeedOptions {
            count,
            rng_seed: Some(7),
            ..SeedOptions::default()
        }
    }

    #[test]
    fn generated_races_stay_in_bounds() {
        let now = Utc::now();
        let races = generate_races(&options(200), now);
        assert_eq!(races.len(), 200);

        for (i, race) in races.iter().enumerate() {
            assert_eq!(race.id, i as i64 + 1);
            assert!((1..=10).contains(&race.meeting_id));
            assert!((1..=12).contains(&race.number));
            let delta = race.advertised_start_time.with_timezone(&Utc) - now;
            assert!(delta.num_hours().abs() <= 48);
        }
    }

    #[test]
    fn fixed_rng_seed_is_reproducible() {
        let now = Utc::now();
        let a = generate_races(&options(20), now);
        let b = generate_races(&options(20), now);
        let names_a: Vec<_> = a.iter().map(|r| (&r.name, r.meeting_id, r.visible)).collect();
        let names_b: Vec<_> = b.iter().map(|r| (&r.name, r.meeting_id, r.visible)).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn generated_times_use_source_offset() {
        let Some(offset) = FixedOffset::east_opt(10 * 3600) else {
            panic!("valid offset");
        };
        let opts = SeedOptions {
            source_offset: offset,
            ..options(5)
        };
        for event in generate_events(&opts, Utc::now()) {
            assert_eq!(event.advertised_start_time.offset(), &offset);
            assert!(event.name.contains(" vs "));
        }
    }

    #[tokio::test]
    async fn reseeding_does_not_duplicate_rows() {
        let pool = test_pool().await;
        let races = generate_races(&options(10), Utc::now());

        assert!(seed_races(&pool, &races).await.is_ok());
        assert!(seed_races(&pool, &races).await.is_ok());

        let count: Result<i64, _> = sqlx::query_scalar("SELECT COUNT(*) FROM races")
            .fetch_one(&pool)
            .await;
        assert_eq!(count.ok(), Some(10));
    }

    #[tokio::test]
    async fn seeds_events() {
        let pool = test_pool().await;
        let events = generate_events(&options(4), Utc::now());
        assert!(seed_events(&pool, &events).await.is_ok());

        let count: Result<i64, _> = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&pool)
            .await;
        assert_eq!(count.ok(), Some(4));
    }
}
