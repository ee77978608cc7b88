//! Race listing and lookup DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ListRacesFilter, Race};

/// Request body for `POST /list-races`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ListRacesRequest {
    /// Optional filter. Absent means every race, sorted descending.
    #[serde(default)]
    pub filter: Option<ListRacesFilter>,
}

/// Response body for `POST /list-races`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListRacesResponse {
    /// Matching races sorted by advertised start time.
    pub races: Vec<Race>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_no_filter() {
        let Ok(req) = serde_json::from_str::<ListRacesRequest>("{}") else {
            panic!("deserialization failed");
        };
        assert!(req.filter.is_none());
    }

    #[test]
    fn nested_filter_is_read() {
        let json = r#"{"filter":{"meeting_ids":[1,2],"order_by_asc":true}}"#;
        let Ok(req) = serde_json::from_str::<ListRacesRequest>(json) else {
            panic!("deserialization failed");
        };
        let Some(filter) = req.filter else {
            panic!("filter missing");
        };
        assert_eq!(filter.meeting_ids, vec![1, 2]);
        assert!(filter.visible.is_empty());
        assert!(filter.order_by_ascending);
    }
}
