//! Event listing DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Event;

/// Response body for `POST /list-events`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListEventsResponse {
    /// Events in store order.
    pub events: Vec<Event>,
}
