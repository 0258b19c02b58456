//! The character build record.
//!
//! A [`CharacterBuild`] is the transient, in-memory form of a build that a
//! planner session edits. Its durable form is the build code produced by
//! `wakforge-codec`; nothing in this module knows about that format.
//!
//! Absence is always modelled with `Option` here. The `-1` sentinels of the
//! build code exist only at the codec boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    BuildId, CharacterClass, Characteristics, Element, ElementAssignment, EquipmentSlotId, Item,
    ItemId, ModelError, RandomEffectKind, RuneId, SpellId,
};

/// Lowest character level.
pub const MIN_LEVEL: u16 = 1;

/// Highest character level.
pub const MAX_LEVEL: u16 = 230;

/// Rune sockets per equipped item.
pub const RUNE_SLOTS: usize = 4;

/// Highest rune level (one level per rune tier).
pub const MAX_RUNE_LEVEL: u8 = 11;

/// Active spell bar size.
pub const ACTIVE_SPELL_SLOTS: usize = 12;

/// Passive spell bar size.
pub const PASSIVE_SPELL_SLOTS: usize = 6;

/// Character level at which each active spell slot opens.
pub const ACTIVE_SPELL_SLOT_UNLOCK_LEVELS: [u16; ACTIVE_SPELL_SLOTS] =
    [0, 0, 0, 0, 0, 10, 20, 30, 40, 50, 60, 80];

/// Character level at which each passive spell slot opens.
pub const PASSIVE_SPELL_SLOT_UNLOCK_LEVELS: [u16; PASSIVE_SPELL_SLOTS] =
    [10, 30, 50, 100, 150, 200];

// ---------------------------------------------------------------------------
// Runes
// ---------------------------------------------------------------------------

/// Socket colour of a rune.
///
/// The numeric codes are what a build code stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuneColor {
    Red,
    Green,
    Blue,
    White,
}

impl RuneColor {
    /// Numeric colour code.
    pub fn code(self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Green => 2,
            Self::Blue => 3,
            Self::White => 4,
        }
    }

    /// The colour for a numeric code, if any.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Blue),
            4 => Some(Self::White),
            _ => None,
        }
    }
}

/// A rune slotted into one socket of an item.
///
/// Deserializing goes through [`RuneSlot::new`], so the level is always in
/// the tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RuneSlotFields")]
pub struct RuneSlot {
    pub rune: RuneId,
    pub level: u8,
    pub color: RuneColor,
}

impl RuneSlot {
    /// Creates a rune slot, checking the level against the tier table.
    pub fn new(rune: RuneId, level: u8, color: RuneColor) -> Result<Self, ModelError> {
        if !(1..=MAX_RUNE_LEVEL).contains(&level) {
            return Err(ModelError::InvalidRuneLevel(level));
        }
        Ok(Self { rune, level, color })
    }
}

#[derive(Deserialize)]
struct RuneSlotFields {
    rune: RuneId,
    level: u8,
    color: RuneColor,
}

impl TryFrom<RuneSlotFields> for RuneSlot {
    type Error = ModelError;

    fn try_from(fields: RuneSlotFields) -> Result<Self, Self::Error> {
        Self::new(fields.rune, fields.level, fields.color)
    }
}

// ---------------------------------------------------------------------------
// Random element assignment
// ---------------------------------------------------------------------------

/// One sub-slot of a random-element effect: the chosen element and the
/// effect value it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignedElement {
    pub element: Element,
    pub value: i32,
}

/// The player's element choices for an item's random mastery or random
/// resistance effect.
///
/// `slots` holds one entry per sub-slot the item grants (at most three).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomAssignment {
    pub kind: RandomEffectKind,
    pub slots: Vec<AssignedElement>,
}

impl RandomAssignment {
    /// Rebuilds sub-slots from a packed assignment. Elements land in
    /// ascending flag order; see [`ElementAssignment::distribute`].
    pub fn from_assignment(
        kind: RandomEffectKind,
        assignment: ElementAssignment,
        slot_count: usize,
        value: i32,
    ) -> Self {
        let slots = assignment
            .distribute(slot_count)
            .into_iter()
            .map(|element| AssignedElement { element, value })
            .collect();
        Self { kind, slots }
    }

    /// Sub-slots with no element chosen yet.
    pub fn unassigned(kind: RandomEffectKind, slot_count: usize, value: i32) -> Self {
        Self::from_assignment(kind, ElementAssignment::EMPTY, slot_count, value)
    }

    /// The chosen elements, packed.
    pub fn assignment(&self) -> ElementAssignment {
        ElementAssignment::from_elements(self.slots.iter().map(|s| s.element))
    }

    /// Sets the element of sub-slot `index` (0-based). Returns `false` if
    /// the item has no such sub-slot.
    pub fn assign(&mut self, index: usize, element: Element) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.element = element;
                true
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// An item worn in one equipment slot, with everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub item: ItemId,

    /// Present only when the item carries a random mastery or random
    /// resistance effect.
    #[serde(default)]
    pub random_assignment: Option<RandomAssignment>,

    #[serde(default)]
    pub runes: [Option<RuneSlot>; RUNE_SLOTS],

    #[serde(default)]
    pub sublimation: Option<ItemId>,
}

impl EquippedItem {
    /// A bare item with no runes, sublimation, or element choices.
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            random_assignment: None,
            runes: [None; RUNE_SLOTS],
            sublimation: None,
        }
    }

    /// Equips a catalog item, preparing empty element sub-slots when the
    /// item has a random-element effect.
    pub fn from_catalog(item: &Item) -> Self {
        let mut equipped = Self::new(item.id);
        if let Some((kind, effect)) = item.random_effect() {
            equipped.random_assignment = Some(RandomAssignment::unassigned(
                kind,
                usize::from(effect.element_slots),
                effect.base_value(),
            ));
        }
        equipped
    }

    /// Puts a rune into socket `index` (0-based).
    pub fn set_rune(&mut self, index: usize, rune: Option<RuneSlot>) -> Result<(), ModelError> {
        let socket = self
            .runes
            .get_mut(index)
            .ok_or(ModelError::InvalidRuneSocket(index))?;
        *socket = rune;
        Ok(())
    }

    /// Number of occupied rune sockets.
    pub fn rune_count(&self) -> usize {
        self.runes.iter().flatten().count()
    }
}

// ---------------------------------------------------------------------------
// Spells
// ---------------------------------------------------------------------------

/// The active and passive spell bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellBar {
    pub active: [Option<SpellId>; ACTIVE_SPELL_SLOTS],
    pub passive: [Option<SpellId>; PASSIVE_SPELL_SLOTS],
}

impl SpellBar {
    /// How many active slots a character of `level` can use.
    pub fn unlocked_active_slots(level: u16) -> usize {
        ACTIVE_SPELL_SLOT_UNLOCK_LEVELS
            .iter()
            .filter(|unlock| **unlock <= level)
            .count()
    }

    /// How many passive slots a character of `level` can use.
    pub fn unlocked_passive_slots(level: u16) -> usize {
        PASSIVE_SPELL_SLOT_UNLOCK_LEVELS
            .iter()
            .filter(|unlock| **unlock <= level)
            .count()
    }

    /// Returns `true` if no spell is slotted anywhere.
    pub fn is_empty(&self) -> bool {
        self.active.iter().chain(self.passive.iter()).all(Option::is_none)
    }
}

// ---------------------------------------------------------------------------
// CharacterBuild
// ---------------------------------------------------------------------------

/// A complete character build.
///
/// Empty equipment slots are simply missing from `equipment`. The map's
/// iteration order means nothing; anything that needs a stable order must
/// go through [`EquipmentSlotId::lexicographic`] or
/// [`EquipmentSlotId::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBuild {
    #[serde(default = "BuildId::generate")]
    pub id: BuildId,

    #[serde(default)]
    pub class: Option<CharacterClass>,

    #[serde(default = "min_level")]
    pub level: u16,

    #[serde(default)]
    pub characteristics: Characteristics,

    #[serde(default)]
    pub equipment: HashMap<EquipmentSlotId, EquippedItem>,

    #[serde(default)]
    pub spells: SpellBar,

    #[serde(default)]
    pub epic_sub_slot: Option<ItemId>,

    #[serde(default)]
    pub relic_sub_slot: Option<ItemId>,
}

fn min_level() -> u16 {
    MIN_LEVEL
}

impl CharacterBuild {
    /// A fresh level-1 build with no class and nothing equipped.
    pub fn new() -> Self {
        Self {
            id: BuildId::generate(),
            class: None,
            level: MIN_LEVEL,
            characteristics: Characteristics::default(),
            equipment: HashMap::new(),
            spells: SpellBar::default(),
            epic_sub_slot: None,
            relic_sub_slot: None,
        }
    }

    /// Sets the class (builder style).
    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Sets the level, rejecting values outside `1..=230`.
    pub fn set_level(&mut self, level: u16) -> Result<(), ModelError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(ModelError::InvalidLevel(level));
        }
        self.level = level;
        Ok(())
    }

    /// Puts an item in a slot, returning whatever was there before.
    pub fn equip(&mut self, slot: EquipmentSlotId, item: EquippedItem) -> Option<EquippedItem> {
        self.equipment.insert(slot, item)
    }

    /// Empties a slot, returning what it held.
    pub fn unequip(&mut self, slot: EquipmentSlotId) -> Option<EquippedItem> {
        self.equipment.remove(&slot)
    }

    /// The item in a slot, if any.
    pub fn equipped(&self, slot: EquipmentSlotId) -> Option<&EquippedItem> {
        self.equipment.get(&slot)
    }

    /// Mutable access to the item in a slot.
    pub fn equipped_mut(
        &mut self,
        slot: EquipmentSlotId,
    ) -> Result<&mut EquippedItem, ModelError> {
        self.equipment
            .get_mut(&slot)
            .ok_or(ModelError::EmptySlot(slot))
    }

    /// Compares everything except the build id.
    ///
    /// A decoded build always carries a fresh id, so this is the equality
    /// that matters when checking a decoded build against its source.
    pub fn same_loadout(&self, other: &Self) -> bool {
        self.class == other.class
            && self.level == other.level
            && self.characteristics == other.characteristics
            && self.equipment == other.equipment
            && self.spells == other.spells
            && self.epic_sub_slot == other.epic_sub_slot
            && self.relic_sub_slot == other.relic_sub_slot
    }
}

impl Default for CharacterBuild {
    fn default() -> Self {
        Self::new()
    }
}
