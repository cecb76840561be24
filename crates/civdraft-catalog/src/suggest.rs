//! Autocomplete for comma-separated civilization lists.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;

/// Upper bound on suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 25;

/// One autocomplete choice. `name` is the label shown to the user and
/// `value` the text that replaces the input; both are the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Display label.
    pub name: String,
    /// Replacement input value.
    pub value: String,
}

/// Suggests completions for a partially typed list such as `"Rome, Gr"`.
///
/// Every token before the last comma counts as already chosen and is
/// removed from the candidates. The last token is a case-insensitive prefix
/// over the remaining canonical names, taken in catalog order.
#[must_use]
pub fn suggest(catalog: &Catalog, partial_input: &str) -> Vec<Suggestion> {
    let mut tokens: Vec<&str> = partial_input.split(',').map(str::trim).collect();
    let prefix = tokens.pop().unwrap_or_default().to_lowercase();
    let chosen: Vec<&str> = tokens.into_iter().filter(|t| !t.is_empty()).collect();

    let taken: HashSet<String> = chosen
        .iter()
        .map(|token| catalog.resolve(token).unwrap_or(*token).to_lowercase())
        .collect();

    let suggestions: Vec<Suggestion> = catalog
        .all_canonical_names()
        .filter(|name| {
            let lowered = name.to_lowercase();
            !taken.contains(&lowered) && lowered.starts_with(&prefix)
        })
        .take(MAX_SUGGESTIONS)
        .map(|name| {
            let joined = chosen
                .iter()
                .copied()
                .chain(std::iter::once(name))
                .collect::<Vec<_>>()
                .join(", ");
            Suggestion {
                name: joined.clone(),
                value: joined,
            }
        })
        .collect();

    debug!(input = partial_input, count = suggestions.len(), "autocomplete");
    suggestions
}
