//! Civdraft API — HTTP command surface for rolling and banning civilizations.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;
