//! Player naming and player-count limits.

use std::fmt;

use civdraft_core::error::DomainError;

/// Inclusive bounds on the number of players in a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLimits {
    min: usize,
    max: usize,
}

impl Default for PlayerLimits {
    fn default() -> Self {
        Self { min: 2, max: 8 }
    }
}

impl PlayerLimits {
    /// Creates limits allowing `min..=max` players.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `min` is zero or exceeds `max`.
    pub fn new(min: usize, max: usize) -> Result<Self, DomainError> {
        if min == 0 || min > max {
            return Err(DomainError::Validation(format!(
                "invalid player limits {min}..={max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Smallest allowed player count.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest allowed player count.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Rejects counts outside the limits and returns the accepted count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlayerCount` when `requested` is negative
    /// or out of range.
    pub fn check(&self, requested: i64) -> Result<usize, DomainError> {
        usize::try_from(requested)
            .ok()
            .filter(|count| (self.min..=self.max).contains(count))
            .ok_or(DomainError::InvalidPlayerCount {
                requested,
                min: self.min,
                max: self.max,
            })
    }
}

/// Raised when the supplied names do not match the player count. The draft
/// still goes ahead with generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameCountMismatch {
    /// Number of players requested.
    pub expected: usize,
    /// Number of names supplied.
    pub provided: usize,
}

impl fmt::Display for NameCountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You specified {} players but provided {} names. Using default player names instead.",
            self.expected, self.provided
        )
    }
}

/// `"Player 1"` through `"Player {count}"`.
#[must_use]
pub fn default_player_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player {i}")).collect()
}

/// Picks the names a draft is reported under.
///
/// An empty `supplied` list means no names were given. A list of the wrong
/// length falls back to the defaults along with a warning.
#[must_use]
pub fn resolve_player_names(
    count: usize,
    supplied: &[String],
) -> (Vec<String>, Option<NameCountMismatch>) {
    if supplied.is_empty() {
        return (default_player_names(count), None);
    }
    if supplied.len() != count {
        let mismatch = NameCountMismatch {
            expected: count,
            provided: supplied.len(),
        };
        return (default_player_names(count), Some(mismatch));
    }
    (supplied.to_vec(), None)
}
