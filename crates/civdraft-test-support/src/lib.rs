//! Shared test doubles and fixtures for the civilization draft service.

mod catalog;
mod clock;
mod rng;

pub use catalog::{FIXTURE_NAMES, fixture_catalog};
pub use clock::{FixedClock, fixed_clock};
pub use rng::{MockRng, SequenceRng};
