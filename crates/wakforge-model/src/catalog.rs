//! Read-only catalog interface.
//!
//! A decoder only ever sees numeric ids. To turn those back into a usable
//! build it has to ask the game data: does this item still exist, does it
//! have a random-element effect, how many sub-slots does that effect grant,
//! is this spell available to the build's class?
//!
//! The [`Catalog`] trait is that question-asking seam. The planner loads
//! its tables once at startup; the codec borrows them for each decode and
//! never mutates or owns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CharacterClass, ItemId, RuneId, SpellId};

/// Effect action id of "mastery in N random elements".
pub const RANDOM_MASTERY_EFFECT: u32 = 1068;

/// Effect action id of "resistance in N random elements".
pub const RANDOM_RESISTANCE_EFFECT: u32 = 1069;

/// Which kind of random-element effect an item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomEffectKind {
    Mastery,
    Resistance,
}

impl RandomEffectKind {
    /// Maps an effect action id to its kind.
    pub fn from_effect_id(id: u32) -> Option<Self> {
        match id {
            RANDOM_MASTERY_EFFECT => Some(Self::Mastery),
            RANDOM_RESISTANCE_EFFECT => Some(Self::Resistance),
            _ => None,
        }
    }

    /// The effect action id for this kind.
    pub fn effect_id(self) -> u32 {
        match self {
            Self::Mastery => RANDOM_MASTERY_EFFECT,
            Self::Resistance => RANDOM_RESISTANCE_EFFECT,
        }
    }
}

/// Item rarity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Unusual,
    Rare,
    Mythical,
    Legendary,
    Relic,
    Souvenir,
    Epic,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Common => "common",
            Self::Unusual => "unusual",
            Self::Rare => "rare",
            Self::Mythical => "mythical",
            Self::Legendary => "legendary",
            Self::Relic => "relic",
            Self::Souvenir => "souvenir",
            Self::Epic => "epic",
        };
        f.write_str(name)
    }
}

/// One equip effect of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEffect {
    /// Effect action id.
    pub id: u32,

    /// Raw effect parameters. The first is the effect's base value.
    #[serde(default)]
    pub values: Vec<i32>,

    /// Number of element sub-slots, for random-element effects.
    #[serde(default)]
    pub element_slots: u8,
}

impl ItemEffect {
    /// The random-element kind, if this is a random-element effect.
    pub fn random_kind(&self) -> Option<RandomEffectKind> {
        RandomEffectKind::from_effect_id(self.id)
    }

    /// The effect's base value (0 when the effect has no parameters).
    pub fn base_value(&self) -> i32 {
        self.values.first().copied().unwrap_or_default()
    }
}

/// An item catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub level: u16,
    #[serde(default)]
    pub rarity: Rarity,
    /// Raw item type id (e.g. 120 for amulets).
    #[serde(default)]
    pub item_type: u32,
    #[serde(default)]
    pub equip_effects: Vec<ItemEffect>,
}

impl Item {
    /// The item's random mastery or random resistance effect, if it has
    /// one.
    pub fn random_effect(&self) -> Option<(RandomEffectKind, &ItemEffect)> {
        self.equip_effects
            .iter()
            .find_map(|effect| effect.random_kind().map(|kind| (kind, effect)))
    }
}

/// A rune catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rune {
    pub id: RuneId,
    pub name: String,
}

/// A spell catalog record.
///
/// `class` is `None` for spells every class can slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    #[serde(default)]
    pub class: Option<CharacterClass>,
    #[serde(default)]
    pub passive: bool,
}

impl Spell {
    /// Returns `true` if a build of `class` may slot this spell.
    pub fn usable_by(&self, class: Option<CharacterClass>) -> bool {
        match self.class {
            None => true,
            Some(own) => class == Some(own),
        }
    }
}

/// Read-only lookup tables for items, runes, and spells.
///
/// Every lookup returns `None` for an unknown id. Callers treat that as
/// "this reference went stale", never as a failure.
pub trait Catalog {
    /// Looks up an item (equipment, sublimation, or sub-slot item).
    fn item(&self, id: ItemId) -> Option<&Item>;

    /// Looks up a rune.
    fn rune(&self, id: RuneId) -> Option<&Rune>;

    /// Looks up a spell in the class spells of `class` and the shared
    /// spells.
    fn spell(&self, class: Option<CharacterClass>, id: SpellId) -> Option<&Spell>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn item(&self, id: ItemId) -> Option<&Item> {
        (**self).item(id)
    }

    fn rune(&self, id: RuneId) -> Option<&Rune> {
        (**self).rune(id)
    }

    fn spell(&self, class: Option<CharacterClass>, id: SpellId) -> Option<&Spell> {
        (**self).spell(class, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_kind_maps_effect_ids() {
        assert_eq!(RandomEffectKind::from_effect_id(1068), Some(RandomEffectKind::Mastery));
        assert_eq!(RandomEffectKind::from_effect_id(1069), Some(RandomEffectKind::Resistance));
        assert_eq!(RandomEffectKind::from_effect_id(120), None);
        assert_eq!(RandomEffectKind::Resistance.effect_id(), 1069);
    }

    #[test]
    fn test_random_effect_skips_plain_effects() {
        let item = Item {
            id: ItemId(1),
            name: "Ring".into(),
            level: 20,
            rarity: Rarity::Rare,
            item_type: 103,
            equip_effects: vec![
                ItemEffect { id: 20, values: vec![30], element_slots: 0 },
                ItemEffect { id: 1069, values: vec![12, 0, 2], element_slots: 2 },
            ],
        };
        let (kind, effect) = item.random_effect().expect("has a random effect");
        assert_eq!(kind, RandomEffectKind::Resistance);
        assert_eq!(effect.base_value(), 12);
        assert_eq!(effect.element_slots, 2);
    }

    #[test]
    fn test_base_value_without_values_is_zero() {
        let effect = ItemEffect { id: 1068, values: vec![], element_slots: 1 };
        assert_eq!(effect.base_value(), 0);
    }

    #[test]
    fn test_spell_usable_by() {
        let shared = Spell { id: SpellId(1), name: "Motivation".into(), class: None, passive: true };
        let iop = Spell {
            id: SpellId(2),
            name: "Jump".into(),
            class: Some(CharacterClass::Iop),
            passive: false,
        };
        assert!(shared.usable_by(None));
        assert!(shared.usable_by(Some(CharacterClass::Cra)));
        assert!(iop.usable_by(Some(CharacterClass::Iop)));
        assert!(!iop.usable_by(Some(CharacterClass::Cra)));
        assert!(!iop.usable_by(None));
    }

    #[test]
    fn test_item_json_uses_defaults() {
        let json = r#"{ "id": 5, "name": "Cloak" }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId(5));
        assert_eq!(item.rarity, Rarity::Common);
        assert!(item.random_effect().is_none());
    }
}
