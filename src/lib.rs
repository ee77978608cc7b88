//! # racing-gateway
//!
//! REST gateway over two read-only SQLite stores: horse races and sporting
//! events.
//!
//! Races can be filtered by meeting and visibility and are sorted by
//! advertised start time. Each race carries a status (`OPEN` or `CLOSED`)
//! derived from its start time at the moment it is read. Both stores are
//! seeded with dummy data exactly once, on first initialization.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RacingService, SportsService (service/)
//!     │
//!     ├── RacesRepository, EventsRepository (persistence/)
//!     ├── Clock, ListRacesFilter (domain/)
//!     │
//!     └── SQLite (racing.db, sports.db)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
