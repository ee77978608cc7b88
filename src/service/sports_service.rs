//! Sports service: event listing for the API layer.

use std::sync::Arc;

use crate::domain::Event;
use crate::error::GatewayError;
use crate::persistence::EventsRepository;

/// Orchestration layer for event reads.
#[derive(Debug, Clone)]
pub struct SportsService {
    repo: Arc<dyn EventsRepository>,
}

impl SportsService {
    /// Creates a new `SportsService`.
    #[must_use]
    pub fn new(repo: Arc<dyn EventsRepository>) -> Self {
        Self { repo }
    }

    /// Lists all events in store order.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_events(&self) -> Result<Vec<Event>, GatewayError> {
        let events = self.repo.list().await?;
        tracing::info!(returned = events.len(), "events listed");
        Ok(events)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct FailingRepo;

    #[async_trait]
    impl EventsRepository for FailingRepo {
        async fn init(&self) -> Result<(), GatewayError> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<Event>, GatewayError> {
            Err(GatewayError::PersistenceError("database is locked".to_string()))
        }
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let service = SportsService::new(Arc::new(FailingRepo));
        assert_eq!(
            service.list_events().await,
            Err(GatewayError::PersistenceError("database is locked".to_string()))
        );
    }
}
