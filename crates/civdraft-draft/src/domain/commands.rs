//! Commands for the Draft context.

use civdraft_core::command::Command;
use uuid::Uuid;

/// Command to roll civilizations for a table of players.
#[derive(Debug, Clone)]
pub struct RollCivilizations {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Number of players at the table, as requested. Not yet checked
    /// against the player limits.
    pub player_count: i64,
    /// Optional comma-separated player names.
    pub names: Option<String>,
}

impl RollCivilizations {
    /// The supplied names, split on commas and trimmed. An absent or blank
    /// `names` yields an empty list.
    #[must_use]
    pub fn player_names(&self) -> Vec<String> {
        match self.names.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => raw.split(',').map(|n| n.trim().to_owned()).collect(),
        }
    }
}

impl Command for RollCivilizations {
    fn command_type(&self) -> &'static str {
        "draft.roll_civilizations"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to ban civilizations from the next roll.
#[derive(Debug, Clone)]
pub struct BanCivilizations {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Comma-separated civilization names or aliases.
    pub civilizations: String,
}

impl BanCivilizations {
    /// The raw comma-separated tokens.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        self.civilizations.split(',').collect()
    }
}

impl Command for BanCivilizations {
    fn command_type(&self) -> &'static str {
        "draft.ban_civilizations"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
