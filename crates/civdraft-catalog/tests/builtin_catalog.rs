//! Properties of the built-in catalog.

use civdraft_catalog::Catalog;

#[test]
fn test_every_spelling_resolves_to_its_own_entry() {
    let catalog = Catalog::builtin().unwrap();

    for entry in catalog.entries() {
        assert_eq!(catalog.resolve(&entry.name), Some(entry.name.as_str()));
        assert_eq!(
            catalog.resolve(&entry.name.to_uppercase()),
            Some(entry.name.as_str())
        );
        for alias in &entry.aliases {
            assert_eq!(
                catalog.resolve(alias),
                catalog.resolve(&entry.name),
                "alias {alias} should resolve like {}",
                entry.name
            );
        }
    }
}

#[test]
fn test_canonical_names_are_unique() {
    let catalog = Catalog::builtin().unwrap();
    let mut names: Vec<&str> = catalog.all_canonical_names().collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), catalog.len());
}

#[test]
fn test_builtin_catalog_fills_eight_players() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.len() >= 8 * 3);
}
