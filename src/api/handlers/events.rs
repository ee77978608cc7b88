//! Sports handlers: event listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::ListEventsResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /list-events` — List every sporting event.
///
/// # Errors
///
/// Returns [`GatewayError`] on repository failures.
#[utoipa::path(
    post,
    path = "/api/v1/list-events",
    tag = "Sports",
    summary = "List events",
    description = "Returns every sporting event in store order.",
    responses(
        (status = 200, description = "All events", body = ListEventsResponse),
        (status = 500, description = "Repository failure", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let events = state.sports_service.list_events().await?;
    Ok(Json(ListEventsResponse { events }))
}

/// Sports routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/list-events", post(list_events))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;

    use crate::api::build_router;
    use crate::app_state::AppState;
    use crate::domain::FixedClock;
    use crate::persistence::seed::SeedEvent;
    use crate::persistence::{EventsRepository, SqliteEventsRepo, SqliteRacesRepo, test_pool};
    use crate::service::{RacingService, SportsService};

    #[tokio::test]
    async fn list_events_returns_seeded_rows() {
        let Some(start) = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single() else {
            panic!("valid timestamp");
        };
        let events = SqliteEventsRepo::new(
            test_pool().await,
            vec![SeedEvent {
                id: 7,
                name: "Lions vs Tigers".to_string(),
                advertised_start_time: start.fixed_offset(),
            }],
        );
        let Ok(()) = events.init().await else {
            panic!("init failed");
        };
        let races = SqliteRacesRepo::new(test_pool().await, Arc::new(FixedClock::new(start)), vec![]);

        let app = build_router().with_state(AppState {
            racing_service: Arc::new(RacingService::new(Arc::new(races))),
            sports_service: Arc::new(SportsService::new(Arc::new(events))),
        });

        let Ok(request) = Request::builder()
            .method("POST")
            .uri("/api/v1/list-events")
            .body(Body::empty())
        else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router failed");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not json");
        };
        assert_eq!(json["events"][0]["id"], 7);
        assert_eq!(json["events"][0]["name"], "Lions vs Tigers");
        assert_eq!(json["events"][0]["advertised_start_time"], "2024-05-01T12:00:00Z");
    }
}
