//! Command handlers for the Draft context.
//!
//! Handlers validate the command, take the shared locks, and run the
//! domain operation. Locks are always taken exclusions first, then RNG, and
//! are released before the handler returns.

use std::sync::Mutex;

use civdraft_catalog::Catalog;
use civdraft_core::clock::Clock;
use civdraft_core::command::Command;
use civdraft_core::error::DomainError;
use civdraft_core::rng::DeterministicRng;
use tracing::info;

use crate::domain::commands::{BanCivilizations, RollCivilizations};
use crate::domain::engine::{self, DraftRequest, DraftResult};
use crate::domain::exclusions::ExclusionSet;
use crate::domain::roster::PlayerLimits;

/// Handles the `RollCivilizations` command: checks the player count, then
/// drafts and consumes the pending bans under the exclusion lock.
///
/// # Errors
///
/// Returns `DomainError::InvalidPlayerCount` before touching any state if
/// the count is outside `limits`, `DomainError::InsufficientPool` if the
/// pool is too small, or `DomainError::Infrastructure` on a poisoned lock.
pub fn handle_roll_civilizations(
    command: &RollCivilizations,
    catalog: &Catalog,
    limits: PlayerLimits,
    exclusions: &Mutex<ExclusionSet>,
    rng: &Mutex<dyn DeterministicRng + Send>,
    clock: &dyn Clock,
) -> Result<DraftResult, DomainError> {
    let player_count = limits.check(command.player_count)?;

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        players = player_count,
        "handling roll"
    );

    let request = DraftRequest::new(player_count).with_names(command.player_names());

    let mut exclusions_guard = exclusions
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("exclusion mutex poisoned: {e}")))?;
    let mut rng_guard = rng
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;

    engine::draft(
        &request,
        catalog,
        &mut exclusions_guard,
        &mut *rng_guard,
        clock,
    )
}

/// Handles the `BanCivilizations` command, returning the full set of bans
/// pending for the next roll.
///
/// # Errors
///
/// Returns `DomainError::UnrecognizedCivilizations` (leaving the bans
/// untouched) if any token is unknown, `DomainError::Validation` if no
/// tokens were given, or `DomainError::Infrastructure` on a poisoned lock.
pub fn handle_ban_civilizations(
    command: &BanCivilizations,
    catalog: &Catalog,
    exclusions: &Mutex<ExclusionSet>,
) -> Result<Vec<String>, DomainError> {
    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        "handling ban"
    );

    let mut guard = exclusions
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("exclusion mutex poisoned: {e}")))?;
    engine::ban(&command.tokens(), catalog, &mut guard)
}
