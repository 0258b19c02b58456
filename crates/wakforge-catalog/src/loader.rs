//! Loading catalogs from JSON.
//!
//! A catalog file is a single JSON object with three optional arrays:
//!
//! ```json
//! {
//!   "items":  [{ "id": 26494, "name": "Gobball Amulet", "equipEffects": [...] }],
//!   "runes":  [{ "id": 27097, "name": "Melee Mastery Rune" }],
//!   "spells": [{ "id": 4, "name": "Jump", "class": "iop" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wakforge_model::{Item, Rune, Spell};

use crate::{CatalogError, StaticCatalog};

/// The on-disk shape of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub items: Vec<Item>,
    pub runes: Vec<Rune>,
    pub spells: Vec<Spell>,
}

impl From<CatalogFile> for StaticCatalog {
    fn from(file: CatalogFile) -> Self {
        let mut catalog = StaticCatalog::new();
        file.items.into_iter().for_each(|i| catalog.insert_item(i));
        file.runes.into_iter().for_each(|r| catalog.insert_rune(r));
        file.spells.into_iter().for_each(|s| catalog.insert_spell(s));
        catalog
    }
}

impl StaticCatalog {
    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self::from(file);
        tracing::info!(
            items = catalog.item_count(),
            runes = catalog.rune_count(),
            spells = catalog.spell_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the file can't be read and
    /// [`CatalogError::Parse`] if its contents are malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "reading catalog");
        Self::from_json_str(&json)
    }
}
