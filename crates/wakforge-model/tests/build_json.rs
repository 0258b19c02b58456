//! Builds as hand-written JSON documents, the form tools read and write.

use wakforge_model::{
    CharacterBuild, CharacterClass, Element, EquipmentSlotId, ItemId, RuneColor, RuneId, SpellId,
};

const HAND_WRITTEN: &str = r#"{
    "class": "iop",
    "level": 180,
    "characteristics": {
        "strength": { "meleeMastery": 40 },
        "major": { "actionPoints": 1 }
    },
    "equipment": {
        "HEAD": {
            "item": 8156,
            "runes": [{ "rune": 27097, "level": 9, "color": "red" }, null, null, null],
            "sublimation": 27243
        },
        "NECK": {
            "item": 26494,
            "random_assignment": {
                "kind": "mastery",
                "slots": [
                    { "element": "fire", "value": 40 },
                    { "element": "empty", "value": 40 }
                ]
            }
        }
    },
    "spells": {
        "active": [4, null, null, null, null, null, null, null, null, null, null, null],
        "passive": [null, null, null, null, null, null]
    },
    "epic_sub_slot": 27700
}"#;

#[test]
fn test_hand_written_build_parses_with_defaults() {
    let build: CharacterBuild = serde_json::from_str(HAND_WRITTEN).unwrap();

    assert_eq!(build.id.as_str().len(), 32);
    assert_eq!(build.class, Some(CharacterClass::Iop));
    assert_eq!(build.level, 180);
    assert_eq!(build.characteristics.strength.melee_mastery, 40);
    assert_eq!(build.characteristics.agility.lock, 0);
    assert_eq!(build.characteristics.major.action_points, 1);

    let helmet = build.equipped(EquipmentSlotId::Head).unwrap();
    let rune = helmet.runes[0].unwrap();
    assert_eq!((rune.rune, rune.level, rune.color), (RuneId(27097), 9, RuneColor::Red));
    assert_eq!(helmet.sublimation, Some(ItemId(27243)));

    let amulet = build.equipped(EquipmentSlotId::Neck).unwrap();
    let slots = &amulet.random_assignment.as_ref().unwrap().slots;
    assert_eq!(slots[0].element, Element::Fire);
    assert_eq!(slots[1].element, Element::Empty);

    assert_eq!(build.spells.active[0], Some(SpellId(4)));
    assert_eq!(build.epic_sub_slot, Some(ItemId(27700)));
    assert_eq!(build.relic_sub_slot, None);
}

#[test]
fn test_minimal_build_json_is_a_fresh_build() {
    let build: CharacterBuild = serde_json::from_str("{}").unwrap();
    assert!(build.same_loadout(&CharacterBuild::new()));
}

#[test]
fn test_build_json_survives_serialization() {
    let build: CharacterBuild = serde_json::from_str(HAND_WRITTEN).unwrap();
    let json = serde_json::to_string_pretty(&build).unwrap();
    let back: CharacterBuild = serde_json::from_str(&json).unwrap();
    assert_eq!(back, build);
}

#[test]
fn test_unknown_slot_name_rejected() {
    let json = r#"{ "equipment": { "HAT": { "item": 1 } } }"#;
    assert!(serde_json::from_str::<CharacterBuild>(json).is_err());
}
