//! Property catalogue version lookup.
//!
//! Coded form values carry the version of the property catalogue they were
//! documented against. The versions live in the documentation host's
//! database; this side receives them as an injected table.

use crate::{AnalyzerError, AnalyzerResult};
use std::collections::HashMap;
use std::path::Path;

/// Catalogue name for the documentation level field.
pub const CAT_MOL_DOCUMENTATION: &str = "OS.MolDokumentation";

/// Catalogue name for the molecular genetic result field.
pub const CAT_MOL_RESULT: &str = "OS.MolGenErgebnis";

/// Catalogue name for the chromosome field.
pub const CAT_FUSION_CHROMOSOME: &str = "OS.MolDiagFusionChromosome";

/// Catalogue name for the examined gene field.
pub const CAT_MOLECULAR_GENETICS: &str = "OS.Molekulargenetik";

/// Resolves a property catalogue name to its version.
pub trait CatalogueLookup: Send + Sync {
    /// Returns the version for `name`, or 0 when the catalogue is unknown.
    fn version_of(&self, name: &str) -> i64;
}

/// Catalogue versions held in a fixed table.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogue {
    versions: HashMap<String, i64>,
}

impl StaticCatalogue {
    /// Creates a catalogue table from name/version pairs.
    pub fn new(versions: HashMap<String, i64>) -> Self {
        Self { versions }
    }

    /// Loads the table from a JSON file mapping catalogue names to versions.
    pub fn from_json_file(path: &Path) -> AnalyzerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(AnalyzerError::CatalogueRead)?;
        let versions = serde_json::from_str(&contents).map_err(AnalyzerError::CatalogueParse)?;
        Ok(Self { versions })
    }
}

impl CatalogueLookup for StaticCatalogue {
    fn version_of(&self, name: &str) -> i64 {
        match self.versions.get(name) {
            Some(version) => *version,
            None => {
                tracing::error!("no catalogue version for '{}'", name);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_catalogue_resolves() {
        let catalogue =
            StaticCatalogue::new(HashMap::from([(CAT_MOL_RESULT.to_owned(), 17_i64)]));
        assert_eq!(catalogue.version_of(CAT_MOL_RESULT), 17);
    }

    #[test]
    fn unknown_catalogue_falls_back_to_zero() {
        let catalogue = StaticCatalogue::default();
        assert_eq!(catalogue.version_of(CAT_MOL_DOCUMENTATION), 0);
    }
}
