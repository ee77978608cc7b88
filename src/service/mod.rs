//! Service layer: business logic orchestration.
//!
//! [`RacingService`] and [`SportsService`] sit between the REST handlers
//! and the repositories in [`crate::persistence`].

pub mod racing_service;
pub mod sports_service;

pub use racing_service::RacingService;
pub use sports_service::SportsService;
