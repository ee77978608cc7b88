//! Race entity with read-time status derivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Derived betting status of a race.
///
/// Never persisted: recomputed on every read from the advertised start
/// time and the evaluation instant, so the same stored row can move from
/// `OPEN` to `CLOSED` between two reads but never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaceStatus {
    /// The advertised start time has not passed yet.
    Open,
    /// The advertised start time is strictly before the evaluation instant.
    Closed,
}

impl RaceStatus {
    /// Derives the status of a race starting at `advertised_start_time`
    /// as observed at `now`.
    #[must_use]
    pub fn at(advertised_start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if advertised_start_time < now {
            Self::Closed
        } else {
            Self::Open
        }
    }

    /// Wire representation (`"OPEN"` / `"CLOSED"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

/// A race as returned by the race repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Race {
    /// Unique race identifier.
    pub id: i64,
    /// Meeting the race belongs to.
    pub meeting_id: i64,
    /// Race name.
    pub name: String,
    /// Race sequence number within its meeting.
    pub number: i64,
    /// Whether the race is visible to punters.
    pub visible: bool,
    /// Advertised start time as an absolute instant.
    pub advertised_start_time: DateTime<Utc>,
    /// Status derived at read time.
    pub status: RaceStatus,
}

/// Stable sort of `races` by advertised start time.
///
/// Races sharing a start time keep the relative order they arrived in.
pub fn sort_by_start_time(races: &mut [Race], ascending: bool) {
    races.sort_by(|a, b| {
        let ord = a.advertised_start_time.cmp(&b.advertised_start_time);
        if ascending { ord } else { ord.reverse() }
    });
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn instant(secs: i64) -> DateTime<Utc> {
        let Some(ts) = Utc.timestamp_opt(1_700_000_000 + secs, 0).single() else {
            panic!("valid timestamp");
        };
        ts
    }

    fn race(id: i64, start: DateTime<Utc>) -> Race {
        Race {
            id,
            meeting_id: 1,
            name: format!("Race {id}"),
            number: id,
            visible: true,
            advertised_start_time: start,
            status: RaceStatus::Open,
        }
    }

    #[test]
    fn past_start_is_closed() {
        let now = instant(0);
        assert_eq!(RaceStatus::at(now - Duration::hours(1), now), RaceStatus::Closed);
    }

    #[test]
    fn future_start_is_open() {
        let now = instant(0);
        assert_eq!(RaceStatus::at(now + Duration::hours(1), now), RaceStatus::Open);
    }

    #[test]
    fn start_equal_to_now_is_still_open() {
        let now = instant(0);
        assert_eq!(RaceStatus::at(now, now), RaceStatus::Open);
    }

    #[test]
    fn status_never_regresses_across_the_boundary() {
        let start = instant(0);
        let before = RaceStatus::at(start, start - Duration::seconds(1));
        let after = RaceStatus::at(start, start + Duration::seconds(1));
        assert_eq!(before, RaceStatus::Open);
        assert_eq!(after, RaceStatus::Closed);
    }

    #[test]
    fn status_serializes_upper_case() {
        let Ok(json) = serde_json::to_string(&RaceStatus::Closed) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"CLOSED\"");
        assert_eq!(RaceStatus::Open.as_str(), "OPEN");
    }

    #[test]
    fn ascending_sort_keeps_ties_in_arrival_order() {
        let mut races = vec![
            race(1, instant(30)),
            race(2, instant(10)),
            race(3, instant(30)),
            race(4, instant(10)),
        ];
        sort_by_start_time(&mut races, true);
        let ids: Vec<i64> = races.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn descending_sort_keeps_ties_in_arrival_order() {
        let mut races = vec![
            race(1, instant(10)),
            race(2, instant(30)),
            race(3, instant(10)),
            race(4, instant(30)),
        ];
        sort_by_start_time(&mut races, false);
        let ids: Vec<i64> = races.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    proptest! {
        #[test]
        fn sort_orders_and_is_stable(
            offsets in proptest::collection::vec(0i64..20, 0..40),
            ascending in any::<bool>(),
        ) {
            let mut races: Vec<Race> = offsets
                .iter()
                .enumerate()
                .map(|(i, off)| race(i as i64, instant(*off)))
                .collect();
            sort_by_start_time(&mut races, ascending);

            for pair in races.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if a.advertised_start_time == b.advertised_start_time {
                    prop_assert!(a.id < b.id);
                } else if ascending {
                    prop_assert!(a.advertised_start_time < b.advertised_start_time);
                } else {
                    prop_assert!(a.advertised_start_time > b.advertised_start_time);
                }
            }
        }
    }
}
