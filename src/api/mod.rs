//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`. The health check
//! lives at the root. With the `swagger-ui` feature the generated OpenAPI
//! document is served at `/api-docs/openapi.json` and browsable at
//! `/swagger-ui`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "racing-gateway",
        description = "Read-only racing and sports listings over SQLite."
    ),
    paths(
        handlers::races::list_races,
        handlers::races::get_race,
        handlers::events::list_events,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::ListRacesRequest,
        dto::ListRacesResponse,
        dto::ListEventsResponse,
        crate::domain::Race,
        crate::domain::RaceStatus,
        crate::domain::Event,
        crate::domain::ListRacesFilter,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Racing", description = "Race listing and lookup"),
        (name = "Sports", description = "Sporting event listing"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/list-races",
            "/api/v1/races/{id}",
            "/api/v1/list-events",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
