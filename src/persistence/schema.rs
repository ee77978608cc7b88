//! SQLite schema definitions.
//!
//! Tables:
//! - races: race rows; status is derived at read time and not stored
//! - events: sporting event rows

use sqlx::{Executor, Sqlite};

/// Creates the `races` table and its meeting index if they do not exist.
///
/// # Errors
///
/// Returns the driver error if a statement fails.
pub async fn create_races_table<'e, E>(executor: E) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    executor
        .execute(
            r#"
            CREATE TABLE IF NOT EXISTS races (
                id INTEGER PRIMARY KEY,
                meeting_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                number INTEGER NOT NULL,
                visible BOOLEAN NOT NULL,
                advertised_start_time TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_races_meeting ON races(meeting_id);
            "#,
        )
        .await?;
    Ok(())
}

/// Creates the `events` table if it does not exist.
///
/// # Errors
///
/// Returns the driver error if the statement fails.
pub async fn create_events_table<'e, E>(executor: E) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    executor
        .execute(
            r#"
            CREATE TABLE IF NOT EXISTS events (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                advertised_start_time TEXT NOT NULL
            )
            "#,
        )
        .await?;
    Ok(())
}
