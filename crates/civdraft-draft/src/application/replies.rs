//! Text replies for the roll and ban commands.

use crate::domain::engine::DraftResult;

/// Formats a draft as the roll command's reply:
///
/// ```text
/// Civilization choices for each player:
/// Ada: Rome, Zulu, Siam
/// Grace: Inca, Korea, Spain
///
/// Banned civilizations: America, Aztec
/// ```
///
/// A name-count warning, if any, comes first on its own paragraph. The
/// banned line appears only when the draft consumed bans.
#[must_use]
pub fn roll_reply(result: &DraftResult) -> String {
    let mut sections = Vec::with_capacity(3);
    if let Some(warning) = &result.warning {
        sections.push(warning.to_string());
    }

    let mut choices = vec!["Civilization choices for each player:".to_owned()];
    choices.extend(result.assignments.iter().map(|assignment| {
        format!(
            "{}: {}",
            assignment.player,
            assignment.civilizations.join(", ")
        )
    }));
    sections.push(choices.join("\n"));

    if !result.exclusions_applied.is_empty() {
        sections.push(format!(
            "Banned civilizations: {}",
            result.exclusions_applied.join(", ")
        ));
    }
    sections.join("\n\n")
}

/// Confirmation for a successful ban, listing every pending ban.
#[must_use]
pub fn ban_reply(banned: &[String]) -> String {
    format!("Banned civilizations for the next roll: {}", banned.join(", "))
}
