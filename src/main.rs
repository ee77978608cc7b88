//! racing-gateway server entry point.
//!
//! Opens both databases, seeds them on first start, and serves the REST API.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use chrono::Utc;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use racing_gateway::api;
use racing_gateway::app_state::AppState;
use racing_gateway::config::GatewayConfig;
use racing_gateway::domain::SystemClock;
use racing_gateway::persistence::{
    self, EventsRepository, RacesRepository, SqliteEventsRepo, SqliteRacesRepo, seed,
};
use racing_gateway::service::{RacingService, SportsService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    tracing::info!(addr = %config.listen_addr, "starting racing-gateway");

    // Open databases
    let racing_pool = persistence::connect_pool(&config.racing_database_url, config.pool_settings())
        .await
        .context("opening racing database")?;
    let sports_pool = persistence::connect_pool(&config.sports_database_url, config.pool_settings())
        .await
        .context("opening sports database")?;

    // Build repositories and seed them
    let now = Utc::now();
    let races = Arc::new(SqliteRacesRepo::new(
        racing_pool,
        Arc::new(SystemClock),
        seed::generate_races(&config.seed_options(config.seed_race_count), now),
    ));
    let events = Arc::new(SqliteEventsRepo::new(
        sports_pool,
        seed::generate_events(&config.seed_options(config.seed_event_count), now),
    ));
    races.init().await.context("seeding racing database")?;
    events.init().await.context("seeding sports database")?;

    // Build service layer
    let app_state = AppState {
        racing_service: Arc::new(RacingService::new(races)),
        sports_service: Arc::new(SportsService::new(events)),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
