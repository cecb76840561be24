//! Loading catalogs from YAML.

use std::path::Path;

use civdraft_core::error::DomainError;
use serde::Deserialize;
use tracing::info;

use crate::catalog::{Catalog, CivilizationEntry};

const BUILTIN_CATALOG: &str = include_str!("../data/civilizations.yaml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    civilizations: Vec<CivilizationEntry>,
}

impl Catalog {
    /// Parses a catalog from YAML of the form
    /// `civilizations: [{ name: ..., aliases: [...] }]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document is malformed or
    /// violates the catalog invariants.
    pub fn from_yaml_str(source: &str) -> Result<Self, DomainError> {
        let file: CatalogFile = serde_yaml::from_str(source)
            .map_err(|e| DomainError::Validation(format!("invalid catalog document: {e}")))?;
        Self::new(file.civilizations)
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document itself is invalid.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read, or
    /// `DomainError::Validation` if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Infrastructure(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        let catalog = Self::from_yaml_str(&source)?;
        info!(path = %path.display(), civilizations = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}
