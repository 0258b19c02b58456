//! The in-memory catalog.

use std::collections::HashMap;

use wakforge_model::{Catalog, CharacterClass, Item, ItemId, Rune, RuneId, Spell, SpellId};

/// Item, rune, and spell tables keyed by numeric id.
///
/// Inserting a record whose id is already present replaces the old record
/// and logs a warning; the last definition wins.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: HashMap<ItemId, Item>,
    runes: HashMap<RuneId, Rune>,
    spells: HashMap<SpellId, Spell>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an item.
    pub fn insert_item(&mut self, item: Item) {
        let id = item.id;
        if self.items.insert(id, item).is_some() {
            tracing::warn!(%id, "duplicate item in catalog, keeping the last one");
        }
    }

    /// Adds or replaces a rune.
    pub fn insert_rune(&mut self, rune: Rune) {
        let id = rune.id;
        if self.runes.insert(id, rune).is_some() {
            tracing::warn!(%id, "duplicate rune in catalog, keeping the last one");
        }
    }

    /// Adds or replaces a spell.
    pub fn insert_spell(&mut self, spell: Spell) {
        let id = spell.id;
        if self.spells.insert(id, spell).is_some() {
            tracing::warn!(%id, "duplicate spell in catalog, keeping the last one");
        }
    }

    /// Builder-style [`insert_item`](Self::insert_item).
    pub fn with_item(mut self, item: Item) -> Self {
        self.insert_item(item);
        self
    }

    /// Builder-style [`insert_rune`](Self::insert_rune).
    pub fn with_rune(mut self, rune: Rune) -> Self {
        self.insert_rune(rune);
        self
    }

    /// Builder-style [`insert_spell`](Self::insert_spell).
    pub fn with_spell(mut self, spell: Spell) -> Self {
        self.insert_spell(spell);
        self
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of runes.
    pub fn rune_count(&self) -> usize {
        self.runes.len()
    }

    /// Number of spells.
    pub fn spell_count(&self) -> usize {
        self.spells.len()
    }

    /// All spells a build of `class` may slot: its class spells plus the
    /// shared ones, sorted by id.
    pub fn class_spells(&self, class: CharacterClass) -> Vec<&Spell> {
        let mut spells: Vec<&Spell> = self
            .spells
            .values()
            .filter(|spell| spell.usable_by(Some(class)))
            .collect();
        spells.sort_by_key(|spell| spell.id);
        spells
    }
}

impl Catalog for StaticCatalog {
    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    fn rune(&self, id: RuneId) -> Option<&Rune> {
        self.runes.get(&id)
    }

    fn spell(&self, class: Option<CharacterClass>, id: SpellId) -> Option<&Spell> {
        self.spells.get(&id).filter(|spell| spell.usable_by(class))
    }
}
