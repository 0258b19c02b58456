//! Encode-then-decode behavior of whole builds.

mod common;

use std::collections::HashMap;

use wakforge_catalog::StaticCatalog;
use wakforge_codec::{decode, encode, BuildCodec};
use wakforge_model::{
    CharacterBuild, Element, EquipmentSlotId, EquippedItem, ItemId, RandomAssignment,
    RandomEffectKind, SpellId,
};

#[test]
fn test_decode_full_build_reproduces_fields() {
    let catalog = common::catalog();
    let build = common::full_build();

    let decoded = decode(&encode(&build), &catalog).expect("code should decode");

    assert!(decoded.same_loadout(&build), "decoded: {decoded:#?}");
    assert_ne!(decoded.id, build.id);
}

#[test]
fn test_decode_empty_build_resolves_nothing() {
    let catalog = common::catalog();
    let build = CharacterBuild::new();

    let decoded = decode(&encode(&build), &catalog).unwrap();

    assert_eq!(decoded.class, None);
    assert_eq!(decoded.level, 1);
    assert_eq!(decoded.characteristics.total(), 0);
    assert!(decoded.equipment.is_empty());
    assert!(decoded.spells.is_empty());
    assert_eq!(decoded.epic_sub_slot, None);
    assert_eq!(decoded.relic_sub_slot, None);
}

#[test]
fn test_decode_unsorted_assignment_comes_back_sorted() {
    let catalog = common::catalog();
    let mut amulet = EquippedItem::new(ItemId(26494));
    let mut mastery = RandomAssignment::unassigned(RandomEffectKind::Mastery, 3, 40);
    mastery.assign(0, Element::Air);
    mastery.assign(2, Element::Fire);
    amulet.random_assignment = Some(mastery);
    let mut build = CharacterBuild::new();
    build.equip(EquipmentSlotId::Neck, amulet);

    let decoded = decode(&encode(&build), &catalog).unwrap();

    let slots = &decoded.equipped(EquipmentSlotId::Neck).unwrap().random_assignment.as_ref().unwrap().slots;
    let elements: Vec<Element> = slots.iter().map(|s| s.element).collect();
    assert_eq!(elements, vec![Element::Fire, Element::Air, Element::Empty]);
    assert!(slots.iter().all(|s| s.value == 40));
}

#[test]
fn test_decode_against_empty_catalog_drops_references() {
    let build = common::full_build();

    let decoded = decode(&encode(&build), &StaticCatalog::new()).unwrap();

    assert_eq!(decoded.class, build.class);
    assert_eq!(decoded.level, build.level);
    assert_eq!(decoded.characteristics, build.characteristics);
    assert!(decoded.equipment.is_empty());
    assert!(decoded.spells.is_empty());
    assert_eq!(decoded.epic_sub_slot, None);
}

#[test]
fn test_encode_ignores_map_insertion_order() {
    let items = [
        (EquipmentSlotId::Shoulders, 1),
        (EquipmentSlotId::Accessory, 2),
        (EquipmentSlotId::Mount, 3),
        (EquipmentSlotId::Chest, 4),
        (EquipmentSlotId::FirstWeapon, 5),
    ];
    let mut forward = CharacterBuild::new();
    forward.equipment = HashMap::with_capacity(64);
    for (slot, id) in items {
        forward.equip(slot, EquippedItem::new(ItemId(id)));
    }
    let mut backward = CharacterBuild::new();
    for (slot, id) in items.into_iter().rev() {
        backward.equip(slot, EquippedItem::new(ItemId(id)));
    }

    assert_eq!(encode(&forward), encode(&backward));
}

#[test]
fn test_encode_same_build_twice_is_identical() {
    let build = common::full_build();
    let codec = BuildCodec::default();
    assert_eq!(codec.encode(&build), codec.encode(&build.clone()));
}

#[test]
fn test_decode_spells_of_other_class_dropped() {
    let catalog = common::catalog();
    let mut build = common::full_build();
    build.class = Some(wakforge_model::CharacterClass::Feca);

    let decoded = decode(&encode(&build), &catalog).unwrap();

    assert_eq!(decoded.spells.active[0], None);
    assert_eq!(decoded.spells.passive[0], None);
    // shared passive survives
    assert_eq!(decoded.spells.passive[5], Some(SpellId(900)));
}

#[test]
fn test_encode_output_is_compact() {
    let code = encode(&common::full_build());
    assert!(code.chars().count() < 200, "code is {} chars", code.chars().count());
    assert!(code.chars().all(|c| !c.is_whitespace() && !c.is_ascii()));
}

#[test]
fn test_decode_ids_past_i32_range_survive() {
    let big = ItemId(3_000_000_000);
    let catalog = StaticCatalog::new().with_item(wakforge_model::Item {
        id: big,
        name: "Far Id Sublimation".into(),
        level: 0,
        rarity: wakforge_model::Rarity::Epic,
        item_type: 812,
        equip_effects: vec![],
    });
    let build = CharacterBuild { epic_sub_slot: Some(big), ..CharacterBuild::new() };

    let decoded = BuildCodec::default().try_decode(&encode(&build), &catalog).unwrap();

    assert_eq!(decoded.epic_sub_slot, Some(big));
}
