//! Query handlers for the Draft context.

use std::sync::Mutex;

use civdraft_core::error::DomainError;

use crate::domain::exclusions::ExclusionSet;

/// Returns the bans pending for the next roll, in ban order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the exclusion mutex is poisoned.
pub fn pending_bans(exclusions: &Mutex<ExclusionSet>) -> Result<Vec<String>, DomainError> {
    let guard = exclusions
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("exclusion mutex poisoned: {e}")))?;
    Ok(guard.names().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::ban;
    use civdraft_test_support::fixture_catalog;

    #[test]
    fn test_pending_bans_starts_empty() {
        let exclusions = Mutex::new(ExclusionSet::new());
        assert!(pending_bans(&exclusions).unwrap().is_empty());
    }

    #[test]
    fn test_pending_bans_reflects_bans() {
        let catalog = fixture_catalog();
        let exclusions = Mutex::new(ExclusionSet::new());
        ban(&["F", "a"], &catalog, &mut exclusions.lock().unwrap()).unwrap();
        assert_eq!(pending_bans(&exclusions).unwrap(), vec!["F", "A"]);
    }
}
