//! The draft engine: pool filtering, shuffling, and partitioning.

use chrono::{DateTime, Utc};
use civdraft_catalog::Catalog;
use civdraft_core::clock::Clock;
use civdraft_core::error::DomainError;
use civdraft_core::rng::DeterministicRng;
use tracing::{info, warn};

use super::exclusions::ExclusionSet;
use super::roster::{NameCountMismatch, resolve_player_names};

/// Size of every player's group.
pub const CHOICES_PER_PLAYER: usize = 3;

/// A request to draft for `player_count` players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    /// Number of groups to deal.
    pub player_count: usize,
    /// Player names in seat order; empty means "use generated names".
    pub player_names: Vec<String>,
}

impl DraftRequest {
    /// A request with generated player names.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            player_names: Vec::new(),
        }
    }

    /// Sets the player names.
    #[must_use]
    pub fn with_names(mut self, player_names: Vec<String>) -> Self {
        self.player_names = player_names;
        self
    }
}

/// One player's group of civilizations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAssignment {
    /// Player name.
    pub player: String,
    /// Exactly [`CHOICES_PER_PLAYER`] canonical names.
    pub civilizations: Vec<String>,
}

/// The outcome of a successful draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResult {
    /// One entry per player, in request order.
    pub assignments: Vec<PlayerAssignment>,
    /// The bans this draft consumed, in ban order.
    pub exclusions_applied: Vec<String>,
    /// Set when supplied names were discarded for generated ones.
    pub warning: Option<NameCountMismatch>,
    /// When the draft was made.
    pub rolled_at: DateTime<Utc>,
}

/// Canonical names not in `exclusions`, in catalog order.
#[must_use]
pub fn compute_available_pool(catalog: &Catalog, exclusions: &ExclusionSet) -> Vec<String> {
    catalog
        .all_canonical_names()
        .filter(|name| !exclusions.contains(name))
        .map(str::to_owned)
        .collect()
}

/// In-place Fisher–Yates shuffle.
///
/// For `i` from `len - 1` down to `1`, swaps element `i` with an element
/// drawn uniformly from `[0, i]`. Draws exactly `len - 1` values.
///
/// # Errors
///
/// Returns `DomainError::Validation`, without drawing, if the pool has more
/// items than the RNG can index.
pub fn shuffle<T>(pool: &mut [T], rng: &mut dyn DeterministicRng) -> Result<(), DomainError> {
    let len = pool.len();
    let last = u32::try_from(len)
        .map_err(|_| DomainError::Validation(format!("cannot shuffle a pool of {len} items")))?;
    for i in (1..last).rev() {
        let j = rng.next_u32_range(0, i);
        pool.swap(i as usize, j as usize);
    }
    Ok(())
}

/// Slices a shuffled pool into `player_count` consecutive groups of
/// [`CHOICES_PER_PLAYER`]. Group `k` is `shuffled[3k..3k + 3]`; anything past
/// the last group is left undealt.
///
/// # Errors
///
/// Returns `DomainError::Validation` for zero players, or
/// `DomainError::InsufficientPool` if the pool cannot fill every group.
pub fn partition(
    shuffled: &[String],
    player_count: usize,
) -> Result<Vec<Vec<String>>, DomainError> {
    if player_count == 0 {
        return Err(DomainError::Validation(
            "a draft needs at least one player".to_owned(),
        ));
    }

    let required = player_count * CHOICES_PER_PLAYER;
    if shuffled.len() < required {
        return Err(DomainError::InsufficientPool {
            players: player_count,
            required,
            available: shuffled.len(),
        });
    }

    Ok(shuffled[..required]
        .chunks(CHOICES_PER_PLAYER)
        .map(<[String]>::to_vec)
        .collect())
}

/// Runs a draft and consumes the pending bans.
///
/// The exclusion set is cleared only when the draft succeeds; a failed draft
/// leaves the bans in place for the next attempt.
///
/// # Errors
///
/// Returns any error from [`shuffle`] or [`partition`].
pub fn draft(
    request: &DraftRequest,
    catalog: &Catalog,
    exclusions: &mut ExclusionSet,
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<DraftResult, DomainError> {
    let (player_names, warning) =
        resolve_player_names(request.player_count, &request.player_names);
    if let Some(mismatch) = warning {
        warn!(
            expected = mismatch.expected,
            provided = mismatch.provided,
            "player names do not match player count, using defaults"
        );
    }

    let mut pool = compute_available_pool(catalog, exclusions);
    let pool_size = pool.len();
    shuffle(&mut pool, rng)?;
    let groups = partition(&pool, request.player_count)?;

    let exclusions_applied = exclusions.take();

    info!(
        players = request.player_count,
        pool = pool_size,
        exclusions = exclusions_applied.len(),
        "rolled civilizations"
    );

    let assignments = player_names
        .into_iter()
        .zip(groups)
        .map(|(player, civilizations)| PlayerAssignment {
            player,
            civilizations,
        })
        .collect();

    Ok(DraftResult {
        assignments,
        exclusions_applied,
        warning,
        rolled_at: clock.now(),
    })
}

/// Bans civilizations from the next draft.
///
/// Tokens are trimmed and blank tokens skipped; each remaining token is
/// resolved through the catalog. If any token is unknown nothing is added.
/// Returns the full exclusion set after the union.
///
/// # Errors
///
/// Returns `DomainError::UnrecognizedCivilizations` with the offending tokens
/// as typed, or `DomainError::Validation` if no tokens were given.
pub fn ban<S: AsRef<str>>(
    tokens: &[S],
    catalog: &Catalog,
    exclusions: &mut ExclusionSet,
) -> Result<Vec<String>, DomainError> {
    let tokens: Vec<&str> = tokens
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(DomainError::Validation(
            "no civilizations given to ban".to_owned(),
        ));
    }

    let mut resolved = Vec::with_capacity(tokens.len());
    let mut unrecognized = Vec::new();
    for token in tokens {
        match catalog.resolve(token) {
            Some(name) => resolved.push(name),
            None => unrecognized.push(token.to_owned()),
        }
    }

    if !unrecognized.is_empty() {
        warn!(unrecognized = ?unrecognized, "rejected ban");
        return Err(DomainError::UnrecognizedCivilizations(unrecognized));
    }

    for name in resolved {
        exclusions.insert(name);
    }
    info!(banned = ?exclusions.names(), "updated bans for next roll");
    Ok(exclusions.names().to_vec())
}
