//! Civdraft — Catalog bounded context.
//!
//! Owns the immutable list of draftable civilizations, resolves free-form
//! (possibly aliased, any-case) user tokens to canonical names, and builds
//! autocomplete suggestions for the ban command.

pub mod catalog;
pub mod loader;
pub mod suggest;

pub use catalog::{Catalog, CivilizationEntry};
pub use suggest::{MAX_SUGGESTIONS, Suggestion, suggest};
