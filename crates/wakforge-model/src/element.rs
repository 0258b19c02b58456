//! Elements and the bit-packed random element assignment.
//!
//! Some items grant mastery or resistance "in N random elements": the
//! player picks which elements. A build code stores that choice as a
//! single bit-sum of element flags rather than per-sub-slot positions,
//! which is why [`ElementAssignment`] exists as its own value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The most sub-slots a random-element effect can grant.
pub const MAX_ASSIGNABLE_SLOTS: usize = 3;

/// An element, or [`Element::Empty`] for an unassigned sub-slot.
///
/// The flag values are fixed by the wire format:
/// `empty = 0, fire = 1, earth = 2, water = 4, air = 8`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[default]
    Empty,
    Fire,
    Earth,
    Water,
    Air,
}

impl Element {
    /// The four real elements, in ascending flag order.
    pub const ASSIGNABLE: [Element; 4] = [Self::Fire, Self::Earth, Self::Water, Self::Air];

    /// Bit flag of this element. `Empty` has no bit.
    pub const fn flag(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Water => 4,
            Self::Air => 8,
        }
    }

    /// Lowercase element name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Water => "water",
            Self::Air => "air",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of elements packed as a bitfield of [`Element::flag`] values.
///
/// This is the exact value stored in a build code's equipment tuple.
/// Packing loses sub-slot positions: [`ElementAssignment::distribute`]
/// hands elements back out in ascending flag order, so an assignment of
/// `[water, fire]` comes back as `[fire, water]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementAssignment(u8);

impl ElementAssignment {
    /// No elements assigned.
    pub const EMPTY: Self = Self(0);

    const ALL_BITS: u8 = 0b1111;

    /// Builds an assignment from raw bits. Returns `None` if any bit
    /// outside the four element flags is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits & !Self::ALL_BITS == 0).then_some(Self(bits))
    }

    /// Packs the given elements. `Empty` contributes nothing and a
    /// repeated element is counted once.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        Self(elements.into_iter().fold(0, |bits, e| bits | e.flag()))
    }

    /// The packed bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if `element` is in the set. Always `false` for
    /// `Empty`.
    pub fn contains(self, element: Element) -> bool {
        element.flag() != 0 && self.0 & element.flag() != 0
    }

    /// Number of elements in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no element is assigned.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The assigned elements in ascending flag order.
    pub fn elements(self) -> impl Iterator<Item = Element> {
        Element::ASSIGNABLE
            .into_iter()
            .filter(move |e| self.contains(*e))
    }

    /// Spreads the set over `slot_count` sub-slots.
    ///
    /// Elements go to sub-slots 1..N in ascending flag order; remaining
    /// sub-slots are [`Element::Empty`]. Elements beyond `slot_count` are
    /// dropped, and `slot_count` is capped at [`MAX_ASSIGNABLE_SLOTS`].
    pub fn distribute(self, slot_count: usize) -> Vec<Element> {
        let slot_count = slot_count.min(MAX_ASSIGNABLE_SLOTS);
        let mut slots: Vec<Element> = self.elements().take(slot_count).collect();
        slots.resize(slot_count, Element::Empty);
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flags_match_wire_values() {
        assert_eq!(Element::Empty.flag(), 0);
        assert_eq!(Element::Fire.flag(), 1);
        assert_eq!(Element::Earth.flag(), 2);
        assert_eq!(Element::Water.flag(), 4);
        assert_eq!(Element::Air.flag(), 8);
    }

    #[test]
    fn test_from_elements_sums_flags() {
        let a = ElementAssignment::from_elements([Element::Water, Element::Fire, Element::Empty]);
        assert_eq!(a.bits(), 5);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_from_elements_duplicate_counts_once() {
        let a = ElementAssignment::from_elements([Element::Fire, Element::Fire]);
        assert_eq!(a.bits(), 1);
    }

    #[test]
    fn test_from_bits_rejects_unknown_bits() {
        assert_eq!(ElementAssignment::from_bits(15).map(|a| a.bits()), Some(15));
        assert_eq!(ElementAssignment::from_bits(16), None);
        assert_eq!(ElementAssignment::from_bits(0xFF), None);
    }

    #[test]
    fn test_distribute_sorts_ascending() {
        let a = ElementAssignment::from_elements([Element::Air, Element::Fire]);
        assert_eq!(
            a.distribute(3),
            vec![Element::Fire, Element::Air, Element::Empty]
        );
    }

    #[test]
    fn test_distribute_empty_pads_with_empty() {
        assert_eq!(
            ElementAssignment::EMPTY.distribute(3),
            vec![Element::Empty; 3]
        );
    }

    #[test]
    fn test_distribute_drops_elements_past_slot_count() {
        let a = ElementAssignment::from_bits(0b1111).unwrap();
        assert_eq!(a.distribute(2), vec![Element::Fire, Element::Earth]);
    }

    #[test]
    fn test_distribute_caps_slot_count() {
        assert_eq!(ElementAssignment::EMPTY.distribute(7).len(), MAX_ASSIGNABLE_SLOTS);
    }

    #[test]
    fn test_contains_empty_is_false() {
        assert!(!ElementAssignment::from_bits(15).unwrap().contains(Element::Empty));
    }

    proptest! {
        #[test]
        fn prop_distribute_then_pack_keeps_set(bits in 0u8..16) {
            let a = ElementAssignment::from_bits(bits).unwrap();
            prop_assume!(a.len() <= MAX_ASSIGNABLE_SLOTS);
            let slots = a.distribute(MAX_ASSIGNABLE_SLOTS);
            prop_assert_eq!(ElementAssignment::from_elements(slots), a);
        }

        #[test]
        fn prop_pack_ignores_order(mut picks in proptest::collection::vec(0usize..4, 0..3)) {
            let forward = ElementAssignment::from_elements(
                picks.iter().map(|i| Element::ASSIGNABLE[*i]),
            );
            picks.reverse();
            let backward = ElementAssignment::from_elements(
                picks.iter().map(|i| Element::ASSIGNABLE[*i]),
            );
            prop_assert_eq!(forward, backward);
        }
    }
}
