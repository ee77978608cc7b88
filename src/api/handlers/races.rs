//! Race handlers: filtered listing and single-race lookup.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ListRacesRequest, ListRacesResponse};
use crate::app_state::AppState;
use crate::domain::Race;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /list-races` — List races matching an optional filter.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for a malformed body, or
/// [`GatewayError`] on repository failures.
#[utoipa::path(
    post,
    path = "/api/v1/list-races",
    tag = "Racing",
    summary = "List races",
    description = "Returns races filtered by meeting id and visibility, sorted by advertised start time. Each race carries a status derived from the current time.",
    request_body = ListRacesRequest,
    responses(
        (status = 200, description = "Matching races", body = ListRacesResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Repository failure", body = ErrorResponse),
    )
)]
pub async fn list_races(
    State(state): State<AppState>,
    payload: Result<Json<ListRacesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let races = state
        .racing_service
        .list_races(req.filter.as_ref())
        .await?;
    Ok(Json(ListRacesResponse { races }))
}

/// `GET /races/{id}` — Get a single race.
///
/// # Errors
///
/// Returns [`GatewayError::RaceNotFound`] if the race does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/races/{id}",
    tag = "Racing",
    summary = "Get race",
    description = "Returns one race with its status derived from the current time.",
    params(
        ("id" = i64, Path, description = "Race id"),
    ),
    responses(
        (status = 200, description = "Race details", body = Race),
        (status = 404, description = "Race not found", body = ErrorResponse),
    )
)]
pub async fn get_race(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, GatewayError> {
    let race = state.racing_service.get_race(id).await?;
    Ok(Json(race))
}

/// Racing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/list-races", post(list_races))
        .route("/races/{id}", get(get_race))
}
