//! Racing service: race listing and lookup for the API layer.

use std::sync::Arc;

use crate::domain::{ListRacesFilter, Race};
use crate::error::GatewayError;
use crate::persistence::RacesRepository;

/// Orchestration layer for race reads.
///
/// Stateless coordinator over a [`RacesRepository`]. The repository
/// reports a missing race as absent; this layer turns that into
/// [`GatewayError::RaceNotFound`] for callers that need an error.
#[derive(Debug, Clone)]
pub struct RacingService {
    repo: Arc<dyn RacesRepository>,
}

impl RacingService {
    /// Creates a new `RacingService`.
    #[must_use]
    pub fn new(repo: Arc<dyn RacesRepository>) -> Self {
        Self { repo }
    }

    /// Lists races matching `filter`.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_races(
        &self,
        filter: Option<&ListRacesFilter>,
    ) -> Result<Vec<Race>, GatewayError> {
        let races = self.repo.list(filter).await?;
        tracing::info!(
            meeting_ids = filter.map_or(0, |f| f.meeting_ids.len()),
            visible = filter.map_or(0, |f| f.visible.len()),
            returned = races.len(),
            "races listed"
        );
        Ok(races)
    }

    /// Fetches a single race.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::RaceNotFound`] if the repository has no such
    /// race, or propagates repository failures.
    pub async fn get_race(&self, id: i64) -> Result<Race, GatewayError> {
        self.repo
            .get(id)
            .await?
            .ok_or(GatewayError::RaceNotFound(id))
    }
}
