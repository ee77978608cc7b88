//! Domain layer: races, events, list filters, and the evaluation clock.
//!
//! Races carry a status derived at read time from their advertised start
//! time and the instant reported by a [`Clock`].

pub mod clock;
pub mod event;
pub mod filter;
pub mod race;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event::Event;
pub use filter::ListRacesFilter;
pub use race::{Race, RaceStatus, sort_by_start_time};
