//! Civdraft — Draft bounded context.
//!
//! Responsible for partitioning the catalog, minus any pending bans, into
//! disjoint groups of three civilizations per player, and for the
//! single-use lifecycle of those bans.

pub mod application;
pub mod domain;
