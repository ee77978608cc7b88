//! Caller-supplied filter for race listings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Membership filter and sort direction for `List` on races.
///
/// An empty `meeting_ids` or `visible` set places no restriction on that
/// column. Non-empty sets are combined with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListRacesFilter {
    /// Only return races whose meeting is one of these.
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    /// Only return races whose visibility flag is one of these.
    #[serde(default)]
    pub visible: Vec<bool>,
    /// Sort by advertised start time ascending when `true`, descending
    /// otherwise.
    #[serde(default, rename = "order_by_asc")]
    pub order_by_ascending: bool,
}

impl ListRacesFilter {
    /// Restricts the listing to the given meetings.
    #[must_use]
    pub fn with_meeting_ids(mut self, meeting_ids: impl IntoIterator<Item = i64>) -> Self {
        self.meeting_ids = meeting_ids.into_iter().collect();
        self
    }

    /// Restricts the listing to the given visibility flags.
    #[must_use]
    pub fn with_visible(mut self, visible: impl IntoIterator<Item = bool>) -> Self {
        self.visible = visible.into_iter().collect();
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn ascending(mut self, ascending: bool) -> Self {
        self.order_by_ascending = ascending;
        self
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_unrestricted_descending() {
        let Ok(filter) = serde_json::from_str::<ListRacesFilter>("{}") else {
            panic!("deserialization failed");
        };
        assert_eq!(filter, ListRacesFilter::default());
        assert!(!filter.order_by_ascending);
    }

    #[test]
    fn wire_name_for_sort_flag() {
        let json = r#"{"meeting_ids":[3,5],"visible":[true],"order_by_asc":true}"#;
        let Ok(filter) = serde_json::from_str::<ListRacesFilter>(json) else {
            panic!("deserialization failed");
        };
        assert_eq!(
            filter,
            ListRacesFilter::default()
                .with_meeting_ids([3, 5])
                .with_visible([true])
                .ascending(true)
        );
    }
}
