//! Conversion between stored timestamp text and absolute instants.
//!
//! Timestamps are stored as TEXT in whatever offset the writer used. Reads
//! keep the absolute instant and discard the original offset, so
//! `2024-03-01T20:00:00+10:00` and `2024-03-01T10:00:00Z` convert to the
//! same [`DateTime<Utc>`].

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::GatewayError;

/// Layouts carrying an explicit UTC offset.
const OFFSET_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];

/// Offset-less layouts, interpreted as UTC.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Earliest and latest representable years on the wire.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Why a stored timestamp could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// The text matched none of the accepted layouts.
    #[error("unrecognised timestamp {0:?}")]
    Unparseable(String),

    /// The instant lies outside years 1–9999.
    #[error("timestamp {0} outside representable range")]
    OutOfRange(DateTime<Utc>),
}

impl From<TimestampError> for GatewayError {
    fn from(err: TimestampError) -> Self {
        Self::TimestampConversion(err.to_string())
    }
}

/// Converts stored timestamp text into an absolute UTC instant.
///
/// # Errors
///
/// Returns [`TimestampError::Unparseable`] when `raw` matches no accepted
/// layout and [`TimestampError::OutOfRange`] when the instant cannot be
/// represented on the wire.
pub fn parse_stored(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let text = raw.trim();
    let instant = parse_with_offset(text)
        .or_else(|| parse_naive(text.strip_suffix('Z').unwrap_or(text)))
        .ok_or_else(|| TimestampError::Unparseable(raw.to_string()))?;

    if (MIN_YEAR..=MAX_YEAR).contains(&instant.year()) {
        Ok(instant)
    } else {
        Err(TimestampError::OutOfRange(instant))
    }
}

/// Formats `instant` for storage, keeping its offset.
#[must_use]
pub fn to_stored(instant: DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

fn parse_with_offset(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| {
            OFFSET_LAYOUTS
                .iter()
                .find_map(|layout| DateTime::parse_from_str(text, layout).ok())
        })
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_naive(text: &str) -> Option<DateTime<Utc>> {
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
