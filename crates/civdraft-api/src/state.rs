//! Shared application state.

use std::sync::{Arc, Mutex};

use civdraft_catalog::Catalog;
use civdraft_core::clock::{Clock, SystemClock};
use civdraft_core::rng::{DeterministicRng, StdRandom};
use civdraft_draft::domain::exclusions::ExclusionSet;
use civdraft_draft::domain::roster::PlayerLimits;

use crate::config::AppConfig;
use crate::error::AppError;

/// Application state shared across all request handlers.
///
/// The exclusion set is the only mutable draft state; create one
/// `AppState` per process and clone it into the router.
#[derive(Clone)]
pub struct AppState {
    /// The civilizations available to draft.
    pub catalog: Arc<Catalog>,
    /// Player-count limits for the roll command.
    pub limits: PlayerLimits,
    /// Bans pending for the next roll.
    pub exclusions: Arc<Mutex<ExclusionSet>>,
    /// Random source for shuffles.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Timestamp source for drafts.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    /// Create new application state with no pending bans.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        limits: PlayerLimits,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            limits,
            exclusions: Arc::new(Mutex::new(ExclusionSet::new())),
            rng,
            clock,
        }
    }

    /// Builds production state: loads the catalog, seeds the RNG, and uses
    /// the system clock.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the catalog cannot be loaded, or
    /// `AppError::Config` if the player limits are inconsistent.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let limits = config.player_limits()?;

        let required = limits.max() * civdraft_draft::domain::engine::CHOICES_PER_PLAYER;
        if catalog.len() < required {
            tracing::warn!(
                civilizations = catalog.len(),
                required,
                "catalog cannot fill a roll at the maximum player count"
            );
        }

        let generator = match config.rng_seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_os_rng(),
        };
        let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(generator));

        Ok(Self::new(
            Arc::new(catalog),
            limits,
            rng,
            Arc::new(SystemClock),
        ))
    }
}
