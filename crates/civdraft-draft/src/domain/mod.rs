//! Domain model for the Draft context.

pub mod commands;
pub mod engine;
pub mod exclusions;
pub mod roster;
