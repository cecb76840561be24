//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// The `Display` form of every variant is a single human-readable line that
/// the command surface can hand straight back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A roll asked for a number of players outside the configured limits.
    #[error("player count must be between {min} and {max}, got {requested}")]
    InvalidPlayerCount {
        /// The player count that was requested, as typed.
        requested: i64,
        /// Smallest allowed player count.
        min: usize,
        /// Largest allowed player count.
        max: usize,
    },

    /// One or more ban tokens did not match any catalog entry.
    #[error("The following civilizations are not recognized: {}", .0.join(", "))]
    UnrecognizedCivilizations(Vec<String>),

    /// The pool left after exclusions cannot give every player a full group.
    #[error(
        "Not enough civilizations to roll for {players} players: {required} needed but only {available} available."
    )]
    InsufficientPool {
        /// Number of players in the draft.
        players: usize,
        /// Civilizations needed to fill every group.
        required: usize,
        /// Civilizations left in the pool.
        available: usize,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error (catalog file I/O, poisoned locks).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
