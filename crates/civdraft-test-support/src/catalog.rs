//! Fixture catalog with six single-letter civilizations.

use civdraft_catalog::{Catalog, CivilizationEntry};

/// Canonical names of the fixture catalog, in definition order.
pub const FIXTURE_NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// A catalog of `A` through `F`. `A` also answers to the alias `Alpha`.
///
/// # Panics
///
/// Never; the fixture satisfies the catalog invariants.
#[must_use]
pub fn fixture_catalog() -> Catalog {
    let entries = FIXTURE_NAMES
        .iter()
        .map(|&name| {
            if name == "A" {
                CivilizationEntry::new(name, ["Alpha"])
            } else {
                CivilizationEntry::new(name, Vec::<String>::new())
            }
        })
        .collect();
    Catalog::new(entries).unwrap()
}
