//! Character build domain model for Wakforge.
//!
//! This crate defines WHAT a character build is, independent of how it
//! gets stored or shared:
//!
//! - **Identity** ([`BuildId`], [`ItemId`], [`RuneId`], [`SpellId`]):
//!   newtype wrappers around the raw numeric catalog ids.
//! - **Build** ([`CharacterBuild`], [`Characteristics`], [`EquippedItem`],
//!   [`SpellBar`]): the in-memory record a planner session edits.
//! - **Enumerations** ([`CharacterClass`], [`EquipmentSlotId`],
//!   [`Element`], [`RuneColor`]): closed sets whose order matters to the
//!   build-code wire format.
//! - **Catalog interface** ([`Catalog`], [`Item`], [`Rune`], [`Spell`]):
//!   the read-only lookup tables a decoder resolves ids against.
//!
//! # How it fits in the stack
//!
//! ```text
//! Codec (wakforge-codec)   ← turns a CharacterBuild into a build code and back
//!     ↕
//! Model (this crate)       ← owns the build record and the Catalog trait
//!     ↕
//! Catalog (wakforge-catalog) ← implements Catalog over loaded game data
//! ```

mod build;
mod catalog;
mod characteristic;
mod class;
mod element;
mod error;
mod ids;
mod slot;

pub use build::{
    AssignedElement, CharacterBuild, EquippedItem, RandomAssignment, RuneColor,
    RuneSlot, SpellBar, ACTIVE_SPELL_SLOTS, ACTIVE_SPELL_SLOT_UNLOCK_LEVELS,
    MAX_LEVEL, MAX_RUNE_LEVEL, MIN_LEVEL, PASSIVE_SPELL_SLOTS,
    PASSIVE_SPELL_SLOT_UNLOCK_LEVELS, RUNE_SLOTS,
};
pub use catalog::{
    Catalog, Item, ItemEffect, RandomEffectKind, Rarity, Rune, Spell,
    RANDOM_MASTERY_EFFECT, RANDOM_RESISTANCE_EFFECT,
};
pub use characteristic::{
    Agility, Characteristic, CharacteristicGroup, Characteristics, Fortune,
    Intelligence, Major, Strength,
};
pub use class::CharacterClass;
pub use element::{Element, ElementAssignment, MAX_ASSIGNABLE_SLOTS};
pub use error::ModelError;
pub use ids::{BuildId, ItemId, RuneId, SpellId};
pub use slot::EquipmentSlotId;
