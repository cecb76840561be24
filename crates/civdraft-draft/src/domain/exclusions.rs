//! The set of civilizations banned from the next draft.

/// Canonical names excluded from the next draft.
///
/// Members are kept in the order they were first banned. Only
/// [`crate::domain::engine::ban`] adds members, and it only adds names that
/// resolved against the catalog, so every member is a canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `name` (case-sensitive canonical name) is excluded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Members in ban order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of excluded civilizations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if nothing is banned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Adds a canonical name; already-present names are ignored.
    pub(crate) fn insert(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_owned());
        }
    }

    /// Returns the current members and leaves the set empty.
    pub(crate) fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.names)
    }
}
