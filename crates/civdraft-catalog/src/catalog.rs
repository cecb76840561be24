//! Catalog entries and name resolution.

use std::collections::HashMap;

use civdraft_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A draftable civilization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilizationEntry {
    /// Case-sensitive display identifier, unique across the catalog.
    pub name: String,
    /// Alternate spellings that resolve to `name`, matched case-insensitively.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CivilizationEntry {
    /// Creates an entry with the given aliases.
    pub fn new<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    fn lookup_keys(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(&self.name)
            .chain(&self.aliases)
            .map(|key| key.to_lowercase())
    }
}

/// The immutable, ordered set of civilizations a draft is drawn from.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CivilizationEntry>,
    // lower-cased name or alias -> index into `entries`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, enforcing the uniqueness invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the catalog is empty, a name or
    /// alias is blank, or any name/alias of one entry collides
    /// (case-insensitively) with a name/alias of another entry.
    pub fn new(entries: Vec<CivilizationEntry>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::Validation(
                "catalog must contain at least one civilization".to_owned(),
            ));
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        for (position, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() || entry.aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(DomainError::Validation(format!(
                    "catalog entry #{} has a blank name or alias",
                    position + 1
                )));
            }
            for key in entry.lookup_keys() {
                match index.get(&key).copied() {
                    Some(owner) if owner != position => {
                        return Err(DomainError::Validation(format!(
                            "'{key}' is used by both {} and {}",
                            entries[owner].name, entry.name
                        )));
                    }
                    Some(_) => {}
                    None => {
                        index.insert(key, position);
                    }
                }
            }
        }

        Ok(Self { entries, index })
    }

    /// Maps a user-supplied token to its canonical name.
    ///
    /// Matching is case-insensitive against canonical names and aliases.
    /// Surrounding whitespace is ignored. Returns `None` when nothing matches.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.index
            .get(&token.trim().to_lowercase())
            .map(|&position| self.entries[position].name.as_str())
    }

    /// True if `name` is exactly (case-sensitively) a canonical name.
    #[must_use]
    pub fn is_canonical(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// True if `token` resolves to some entry, through any spelling.
    #[must_use]
    pub fn is_known_token(&self, token: &str) -> bool {
        self.resolve(token).is_some()
    }

    /// Canonical names in definition order.
    pub fn all_canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// All entries in definition order.
    #[must_use]
    pub fn entries(&self) -> &[CivilizationEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
