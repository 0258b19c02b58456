//! Turning a structurally valid code into a build.
//!
//! Every id is checked against the catalog. Ids the catalog no longer
//! knows are dropped quietly; old codes keep working after a game patch
//! removes an item.

use wakforge_model::{
    Catalog, CharacterBuild, CharacterClass, EquippedItem, ItemId, RandomAssignment, SpellId,
};

use crate::schema::{RawBuild, RawSlot};

pub(crate) fn assemble<C: Catalog + ?Sized>(raw: RawBuild, catalog: &C) -> CharacterBuild {
    let mut build = CharacterBuild::new();
    build.class = raw.class;
    build.level = raw.level;
    build.characteristics = raw.characteristics;

    for (slot, raw_slot) in raw.slots {
        if let Some(equipped) = resolve_slot(raw_slot, catalog) {
            build.equip(slot, equipped);
        }
    }

    build.spells.active = raw.active.map(|id| resolve_spell(id, raw.class, catalog));
    build.spells.passive = raw.passive.map(|id| resolve_spell(id, raw.class, catalog));
    build.epic_sub_slot = resolve_item(raw.epic, catalog);
    build.relic_sub_slot = resolve_item(raw.relic, catalog);
    build
}

/// An unknown item empties the whole slot, runes and sublimation included.
fn resolve_slot<C: Catalog + ?Sized>(raw: RawSlot, catalog: &C) -> Option<EquippedItem> {
    let id = raw.item?;
    let Some(item) = catalog.item(id) else {
        tracing::debug!(item = %id, "dropping stale item");
        return None;
    };

    let mut equipped = EquippedItem::new(item.id);
    // The item's own sub-slot count decides the shape, not the bits.
    equipped.random_assignment = item.random_effect().map(|(kind, effect)| {
        RandomAssignment::from_assignment(
            kind,
            raw.assignment,
            usize::from(effect.element_slots),
            effect.base_value(),
        )
    });
    equipped.runes = raw.runes.map(|socket| {
        socket.filter(|slotted| {
            let known = catalog.rune(slotted.rune).is_some();
            if !known {
                tracing::debug!(rune = %slotted.rune, "dropping stale rune");
            }
            known
        })
    });
    equipped.sublimation = resolve_item(raw.sublimation, catalog);
    Some(equipped)
}

fn resolve_item<C: Catalog + ?Sized>(id: Option<ItemId>, catalog: &C) -> Option<ItemId> {
    let id = id?;
    if catalog.item(id).is_none() {
        tracing::debug!(item = %id, "dropping stale item");
        return None;
    }
    Some(id)
}

fn resolve_spell<C: Catalog + ?Sized>(
    id: Option<SpellId>,
    class: Option<CharacterClass>,
    catalog: &C,
) -> Option<SpellId> {
    let id = id?;
    match catalog.spell(class, id) {
        Some(spell) => Some(spell.id),
        None => {
            tracing::debug!(spell = %id, ?class, "dropping unknown spell");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wakforge_catalog::StaticCatalog;
    use wakforge_model::{
        Element, ElementAssignment, EquipmentSlotId, Item, ItemEffect, Rarity, Rune, RuneColor,
        RuneId, RuneSlot, Spell, RANDOM_MASTERY_EFFECT,
    };

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_item(Item {
                id: ItemId(26494),
                name: "Gobball Amulet".into(),
                level: 50,
                rarity: Rarity::Rare,
                item_type: 120,
                equip_effects: vec![ItemEffect {
                    id: RANDOM_MASTERY_EFFECT,
                    values: vec![40, 0, 2, 0],
                    element_slots: 2,
                }],
            })
            .with_item(Item {
                id: ItemId(27243),
                name: "Sublimation".into(),
                level: 1,
                rarity: Rarity::Rare,
                item_type: 812,
                equip_effects: vec![],
            })
            .with_rune(Rune { id: RuneId(27097), name: "Melee Mastery Rune".into() })
            .with_spell(Spell {
                id: SpellId(201),
                name: "Shovel Kiss".into(),
                class: Some(CharacterClass::Enutrof),
                passive: false,
            })
    }

    fn raw_with_slot(slot: RawSlot) -> RawBuild {
        RawBuild { slots: vec![(EquipmentSlotId::Neck, slot)], ..RawBuild::default() }
    }

    #[test]
    fn test_assemble_unknown_item_drops_slot() {
        let raw = raw_with_slot(RawSlot {
            item: Some(ItemId(1)),
            sublimation: Some(ItemId(27243)),
            ..RawSlot::default()
        });
        let build = assemble(raw, &catalog());
        assert!(build.equipment.is_empty());
    }

    #[test]
    fn test_assemble_extra_elements_dropped_for_two_slot_item() {
        let bits = Element::Fire.flag() | Element::Water.flag() | Element::Air.flag();
        let raw = raw_with_slot(RawSlot {
            item: Some(ItemId(26494)),
            assignment: ElementAssignment::from_bits(bits).unwrap(),
            ..RawSlot::default()
        });
        let build = assemble(raw, &catalog());

        let assignment = build.equipped(EquipmentSlotId::Neck).unwrap().random_assignment.as_ref().unwrap();
        let elements: Vec<Element> = assignment.slots.iter().map(|s| s.element).collect();
        assert_eq!(elements, vec![Element::Fire, Element::Water]);
        assert!(assignment.slots.iter().all(|s| s.value == 40));
    }

    #[test]
    fn test_assemble_stale_rune_and_sublimation_dropped() {
        let rune = |id| Some(RuneSlot::new(RuneId(id), 5, RuneColor::Red).unwrap());
        let raw = raw_with_slot(RawSlot {
            item: Some(ItemId(26494)),
            runes: [rune(27097), rune(1), None, None],
            sublimation: Some(ItemId(2)),
            ..RawSlot::default()
        });
        let build = assemble(raw, &catalog());

        let item = build.equipped(EquipmentSlotId::Neck).unwrap();
        assert_eq!(item.runes[0].map(|r| r.rune), Some(RuneId(27097)));
        assert!(item.runes[1].is_none());
        assert!(item.sublimation.is_none());
    }

    #[test]
    fn test_assemble_spell_of_other_class_dropped() {
        let mut raw = RawBuild { class: Some(CharacterClass::Enutrof), ..RawBuild::default() };
        raw.active[0] = Some(SpellId(201));
        raw.active[1] = Some(SpellId(999));
        let build = assemble(raw.clone(), &catalog());
        assert_eq!(build.spells.active[0], Some(SpellId(201)));
        assert_eq!(build.spells.active[1], None);

        raw.class = Some(CharacterClass::Iop);
        let build = assemble(raw, &catalog());
        assert_eq!(build.spells.active[0], None);
    }

    #[test]
    fn test_assemble_sub_slots_resolved() {
        let raw = RawBuild { epic: Some(ItemId(27243)), relic: Some(ItemId(5)), ..RawBuild::default() };
        let build = assemble(raw, &catalog());
        assert_eq!(build.epic_sub_slot, Some(ItemId(27243)));
        assert_eq!(build.relic_sub_slot, None);
    }
}
