//! Sporting event entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A sporting event as returned by the event repository.
///
/// Events carry no derived fields and are returned in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique event identifier.
    pub id: i64,
    /// Event name (e.g. `"Lions vs Tigers"`).
    pub name: String,
    /// Advertised start time as an absolute instant.
    pub advertised_start_time: DateTime<Utc>,
}
