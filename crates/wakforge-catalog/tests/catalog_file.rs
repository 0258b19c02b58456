//! Integration tests loading a catalog file from disk.

use std::path::PathBuf;

use wakforge_catalog::StaticCatalog;
use wakforge_model::{Catalog, CharacterClass, ItemId, RandomEffectKind, SpellId};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

#[test]
fn test_from_path_loads_fixture() {
    let catalog = StaticCatalog::from_path(fixture_path()).expect("fixture should load");

    assert_eq!(catalog.item_count(), 6);
    assert_eq!(catalog.rune_count(), 2);
    assert_eq!(catalog.spell_count(), 7);
}

#[test]
fn test_fixture_random_effects_are_resolved() {
    let catalog = StaticCatalog::from_path(fixture_path()).unwrap();

    let amulet = catalog.item(ItemId(26494)).unwrap();
    let (kind, effect) = amulet.random_effect().unwrap();
    assert_eq!(kind, RandomEffectKind::Mastery);
    assert_eq!(effect.element_slots, 3);
    assert_eq!(effect.base_value(), 40);

    let boots = catalog.item(ItemId(12237)).unwrap();
    assert_eq!(boots.random_effect().map(|(k, _)| k), Some(RandomEffectKind::Resistance));
}

#[test]
fn test_fixture_class_spells_include_shared_passives() {
    let catalog = StaticCatalog::from_path(fixture_path()).unwrap();

    let enutrof: Vec<SpellId> = catalog
        .class_spells(CharacterClass::Enutrof)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(
        enutrof,
        vec![SpellId(201), SpellId(202), SpellId(203), SpellId(900), SpellId(901)]
    );
    assert!(catalog.spell(Some(CharacterClass::Feca), SpellId(201)).is_none());
}
