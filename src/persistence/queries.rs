//! Base SQL statements shared by the repositories.
//!
//! Column order here is the order the row decoders expect.

/// Base race listing. Filters and the single-id lookup append a `WHERE`
/// clause to this statement.
pub const RACES_LIST: &str = "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";

/// Base event listing, returned in store order.
pub const EVENTS_LIST: &str = "SELECT id, name, advertised_start_time FROM events";

/// Builds the single-race lookup from [`RACES_LIST`].
#[must_use]
pub fn race_by_id() -> String {
    format!("{RACES_LIST} WHERE id = ?")
}
