//! Shared fixtures for the build-code integration tests.

#![allow(dead_code)]

use wakforge_catalog::StaticCatalog;
use wakforge_model::{
    CharacterBuild, CharacterClass, Characteristic, Element, EquipmentSlotId, EquippedItem,
    ItemId, RandomAssignment, RandomEffectKind, RuneColor, RuneId, RuneSlot, SpellId,
};

/// The catalog shared with the catalog crate's tests.
pub fn catalog() -> StaticCatalog {
    StaticCatalog::from_json_str(include_str!(
        "../../../wakforge-catalog/tests/fixtures/catalog.json"
    ))
    .expect("fixture catalog should parse")
}

/// A build touching every section of the layout, with every id present in
/// [`catalog`].
pub fn full_build() -> CharacterBuild {
    let mut build = CharacterBuild::new().with_class(CharacterClass::Enutrof);
    build.set_level(200).unwrap();
    build.characteristics.set(Characteristic::Lock, 20);
    build.characteristics.set(Characteristic::ActionPoints, 1);
    build.characteristics.set(Characteristic::MajorElementalResistance, 1);
    build.characteristics.set(Characteristic::PercentHealthPoints, 8);

    let mut helmet = EquippedItem::new(ItemId(8156));
    helmet.runes[0] = Some(RuneSlot::new(RuneId(27097), 11, RuneColor::Blue).unwrap());
    helmet.runes[3] = Some(RuneSlot::new(RuneId(27105), 4, RuneColor::White).unwrap());
    helmet.sublimation = Some(ItemId(27243));
    build.equip(EquipmentSlotId::Head, helmet);

    let mut amulet = EquippedItem::new(ItemId(26494));
    let mut mastery = RandomAssignment::unassigned(RandomEffectKind::Mastery, 3, 40);
    mastery.assign(0, Element::Earth);
    mastery.assign(1, Element::Air);
    amulet.random_assignment = Some(mastery);
    build.equip(EquipmentSlotId::Neck, amulet);

    let mut boots = EquippedItem::new(ItemId(12237));
    let mut resistance = RandomAssignment::unassigned(RandomEffectKind::Resistance, 2, 18);
    resistance.assign(0, Element::Water);
    boots.random_assignment = Some(resistance);
    build.equip(EquipmentSlotId::Legs, boots);

    build.spells.active[0] = Some(SpellId(201));
    build.spells.active[11] = Some(SpellId(202));
    build.spells.passive[0] = Some(SpellId(203));
    build.spells.passive[5] = Some(SpellId(900));
    build.epic_sub_slot = Some(ItemId(27700));
    build.relic_sub_slot = Some(ItemId(27701));
    build
}
