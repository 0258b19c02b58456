//! The build-code field layout.
//!
//! A build flattens into this sequence. Both directions walk
//! [`LAYOUT_V1`], and every section's writer and reader sit next to each
//! other below, so the order is defined once.
//!
//! | # | Section | Values |
//! |---|---------|--------|
//! | 0 | version | [`FORMAT_VERSION`] |
//! | 1 | class | class index, `-1` if unset |
//! | 2 | level | 1..=230 |
//! | 3 | characteristics | 29 integers in [`CHARACTERISTIC_ORDER`] |
//! | 4 | equipment | 14 slot tuples, slots sorted by name |
//! | 5 | active spells | 12 ids, `-1` if empty |
//! | 6 | passive spells | 6 ids, `-1` if empty |
//! | 7 | epic sub-slot | item id or `-1` |
//! | 8 | relic sub-slot | item id or `-1` |
//!
//! A slot tuple is `[item, element bits, runes, sublimation]`, where
//! `runes` is four `[rune, level, color]` triples and an empty rune socket
//! is `[-1, -1, -1]`. An empty slot is `[-1, 0, [[-1,-1,-1] x4], -1]`.

use wakforge_model::{
    CharacterBuild, CharacterClass, Characteristic, Characteristics, ElementAssignment,
    EquipmentSlotId, EquippedItem, ItemId, RuneColor, RuneId, RuneSlot, SpellId,
    ACTIVE_SPELL_SLOTS, MAX_LEVEL, MIN_LEVEL, PASSIVE_SPELL_SLOTS, RUNE_SLOTS,
};

use crate::cursor::{Cursor, Writer};
use crate::{CodecError, Value};

/// The version tag written at the front of every build code.
pub const FORMAT_VERSION: i64 = 1;

/// Wire value of an absent reference.
pub(crate) const ABSENT: i64 = -1;

/// Number of top-level values in a version 1 sequence.
pub const V1_VALUE_COUNT: usize = 1 + 2 + 29 + 14 + ACTIVE_SPELL_SLOTS + PASSIVE_SPELL_SLOTS + 2;

/// Wire order of the characteristic counters: intelligence, strength,
/// agility, fortune, major, each group in its documented field order.
///
/// This list is part of the format. Reordering it breaks every existing
/// build code.
pub const CHARACTERISTIC_ORDER: [Characteristic; 29] = [
    Characteristic::PercentHealthPoints,
    Characteristic::IntelligenceElementalResistance,
    Characteristic::Barrier,
    Characteristic::PercentHealsReceived,
    Characteristic::PercentArmorHealthPoints,
    Characteristic::ElementalMastery,
    Characteristic::MeleeMastery,
    Characteristic::DistanceMastery,
    Characteristic::HealthPoints,
    Characteristic::Lock,
    Characteristic::Dodge,
    Characteristic::Initiative,
    Characteristic::LockAndDodge,
    Characteristic::ForceOfWill,
    Characteristic::PercentCriticalHit,
    Characteristic::PercentBlock,
    Characteristic::CriticalMastery,
    Characteristic::RearMastery,
    Characteristic::BerserkMastery,
    Characteristic::HealingMastery,
    Characteristic::RearResistance,
    Characteristic::CriticalResistance,
    Characteristic::ActionPoints,
    Characteristic::MovementPointsAndDamage,
    Characteristic::RangeAndDamage,
    Characteristic::WakfuPoints,
    Characteristic::ControlAndDamage,
    Characteristic::PercentDamageInflicted,
    Characteristic::MajorElementalResistance,
];

/// One run of fields in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Class,
    Level,
    Characteristics,
    Equipment,
    ActiveSpells,
    PassiveSpells,
    EpicSubSlot,
    RelicSubSlot,
}

/// Version 1 layout, after the version tag.
pub(crate) const LAYOUT_V1: [Section; 8] = [
    Section::Class,
    Section::Level,
    Section::Characteristics,
    Section::Equipment,
    Section::ActiveSpells,
    Section::PassiveSpells,
    Section::EpicSubSlot,
    Section::RelicSubSlot,
];

/// A decoded equipment slot before catalog lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawSlot {
    pub item: Option<ItemId>,
    pub assignment: ElementAssignment,
    pub runes: [Option<RuneSlot>; RUNE_SLOTS],
    pub sublimation: Option<ItemId>,
}

/// A structurally valid build code, before catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawBuild {
    pub class: Option<CharacterClass>,
    pub level: u16,
    pub characteristics: Characteristics,
    pub slots: Vec<(EquipmentSlotId, RawSlot)>,
    pub active: [Option<SpellId>; ACTIVE_SPELL_SLOTS],
    pub passive: [Option<SpellId>; PASSIVE_SPELL_SLOTS],
    pub epic: Option<ItemId>,
    pub relic: Option<ItemId>,
}

impl Default for RawBuild {
    fn default() -> Self {
        Self {
            class: None,
            level: MIN_LEVEL,
            characteristics: Characteristics::default(),
            slots: Vec::new(),
            active: [None; ACTIVE_SPELL_SLOTS],
            passive: [None; PASSIVE_SPELL_SLOTS],
            epic: None,
            relic: None,
        }
    }
}

impl Section {
    fn write(self, build: &CharacterBuild, out: &mut Writer) {
        match self {
            Self::Class => out.int(build.class.map_or(ABSENT, |class| class.index() as i64)),
            Self::Level => out.int(i64::from(build.level)),
            Self::Characteristics => {
                for which in CHARACTERISTIC_ORDER {
                    out.int(i64::from(build.characteristics.get(which)));
                }
            }
            Self::Equipment => {
                for slot in EquipmentSlotId::lexicographic() {
                    write_slot(out, build.equipped(slot));
                }
            }
            Self::ActiveSpells => {
                for spell in build.spells.active {
                    out.id(spell.map(|id| id.0));
                }
            }
            Self::PassiveSpells => {
                for spell in build.spells.passive {
                    out.id(spell.map(|id| id.0));
                }
            }
            Self::EpicSubSlot => out.id(build.epic_sub_slot.map(|id| id.0)),
            Self::RelicSubSlot => out.id(build.relic_sub_slot.map(|id| id.0)),
        }
    }

    fn read(self, cursor: &mut Cursor<'_>, raw: &mut RawBuild) -> Result<(), CodecError> {
        match self {
            Self::Class => {
                raw.class = match cursor.int("class")? {
                    ABSENT => None,
                    value => Some(
                        usize::try_from(value)
                            .ok()
                            .and_then(CharacterClass::from_index)
                            .ok_or(CodecError::OutOfRange { field: "class", value })?,
                    ),
                };
            }
            Self::Level => {
                let level: u16 = cursor.ranged("level")?;
                if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
                    return Err(CodecError::OutOfRange { field: "level", value: level.into() });
                }
                raw.level = level;
            }
            Self::Characteristics => {
                for which in CHARACTERISTIC_ORDER {
                    raw.characteristics.set(which, cursor.ranged(which.name())?);
                }
            }
            Self::Equipment => {
                for slot in EquipmentSlotId::lexicographic() {
                    raw.slots.push((slot, read_slot(cursor)?));
                }
            }
            Self::ActiveSpells => {
                for spell in &mut raw.active {
                    *spell = cursor.id("active spell")?.map(SpellId);
                }
            }
            Self::PassiveSpells => {
                for spell in &mut raw.passive {
                    *spell = cursor.id("passive spell")?.map(SpellId);
                }
            }
            Self::EpicSubSlot => raw.epic = cursor.id("epic sub-slot")?.map(ItemId),
            Self::RelicSubSlot => raw.relic = cursor.id("relic sub-slot")?.map(ItemId),
        }
        Ok(())
    }
}

fn write_slot(out: &mut Writer, equipped: Option<&EquippedItem>) {
    out.list(|tuple| {
        tuple.id(equipped.map(|e| e.item.0));
        let bits = equipped
            .and_then(|e| e.random_assignment.as_ref())
            .map_or(0, |assignment| assignment.assignment().bits());
        tuple.int(i64::from(bits));
        tuple.list(|runes| {
            for socket in 0..RUNE_SLOTS {
                let rune = equipped.and_then(|e| e.runes[socket]);
                runes.list(|triple| match rune {
                    Some(rune) => {
                        triple.int(i64::from(rune.rune.0));
                        triple.int(i64::from(rune.level));
                        triple.int(i64::from(rune.color.code()));
                    }
                    None => {
                        triple.int(ABSENT);
                        triple.int(ABSENT);
                        triple.int(ABSENT);
                    }
                });
            }
        });
        tuple.id(equipped.and_then(|e| e.sublimation).map(|id| id.0));
    });
}

fn read_slot(cursor: &mut Cursor<'_>) -> Result<RawSlot, CodecError> {
    let mut tuple = cursor.list("equipment slot")?;
    let item = tuple.id("item")?.map(ItemId);

    let bits: u8 = tuple.ranged("element bits")?;
    let assignment = ElementAssignment::from_bits(bits).ok_or(CodecError::OutOfRange {
        field: "element bits",
        value: bits.into(),
    })?;

    let mut sockets = tuple.list("runes")?;
    let mut runes = [None; RUNE_SLOTS];
    for rune in &mut runes {
        *rune = read_rune(&mut sockets)?;
    }
    sockets.finish()?;

    let sublimation = tuple.id("sublimation")?.map(ItemId);
    tuple.finish()?;
    Ok(RawSlot { item, assignment, runes, sublimation })
}

fn read_rune(cursor: &mut Cursor<'_>) -> Result<Option<RuneSlot>, CodecError> {
    let mut triple = cursor.list("rune")?;
    let id = triple.id("rune id")?;
    let level = triple.int("rune level")?;
    let color = triple.int("rune color")?;
    triple.finish()?;

    let Some(id) = id else {
        return match (level, color) {
            (ABSENT, ABSENT) => Ok(None),
            (ABSENT, value) => Err(CodecError::OutOfRange { field: "rune color", value }),
            (value, _) => Err(CodecError::OutOfRange { field: "rune level", value }),
        };
    };
    let color = u8::try_from(color)
        .ok()
        .and_then(RuneColor::from_code)
        .ok_or(CodecError::OutOfRange { field: "rune color", value: color })?;
    let level_byte = u8::try_from(level)
        .map_err(|_| CodecError::OutOfRange { field: "rune level", value: level })?;
    RuneSlot::new(RuneId(id), level_byte, color)
        .map(Some)
        .map_err(|_| CodecError::OutOfRange { field: "rune level", value: level })
}

/// Flattens a build into a version 1 value sequence.
///
/// Every field is written, defaults included. Equipment is walked in
/// sorted slot order, never in the map's own order.
pub fn serialize(build: &CharacterBuild) -> Vec<Value> {
    let mut out = Writer::new();
    out.int(FORMAT_VERSION);
    for section in LAYOUT_V1 {
        section.write(build, &mut out);
    }
    out.finish()
}

/// Reads a value sequence back into its fields, dispatching on the version
/// tag. Only checks structure; catalog lookups happen later.
pub(crate) fn deserialize(values: &[Value]) -> Result<RawBuild, CodecError> {
    let mut cursor = Cursor::new(values, "build");
    let layout = match cursor.int("version")? {
        FORMAT_VERSION => &LAYOUT_V1,
        other => return Err(CodecError::UnsupportedVersion(other)),
    };
    let mut raw = RawBuild::default();
    for section in layout {
        section.read(&mut cursor, &mut raw)?;
    }
    cursor.finish()?;
    Ok(raw)
}
