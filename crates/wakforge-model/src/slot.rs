//! Equipment slot identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// One equipment position on a character.
///
/// Each slot has two orders that must not be confused:
///
/// - **Display order** ([`EquipmentSlotId::display_order`]): how the
///   planner lays slots out on screen.
/// - **Wire order** ([`EquipmentSlotId::lexicographic`]): ascending by
///   the slot's string id. Build codes list slots in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentSlotId {
    Head,
    Chest,
    Shoulders,
    Legs,
    Neck,
    Back,
    Belt,
    FirstWeapon,
    SecondWeapon,
    LeftHand,
    RightHand,
    Accessory,
    Pet,
    Mount,
}

impl EquipmentSlotId {
    /// Every slot, in display order.
    pub const ALL: [EquipmentSlotId; 14] = [
        Self::Head,
        Self::Chest,
        Self::Shoulders,
        Self::Legs,
        Self::Neck,
        Self::Back,
        Self::Belt,
        Self::FirstWeapon,
        Self::SecondWeapon,
        Self::LeftHand,
        Self::RightHand,
        Self::Accessory,
        Self::Pet,
        Self::Mount,
    ];

    /// The slot's string id, e.g. `"FIRST_WEAPON"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Chest => "CHEST",
            Self::Shoulders => "SHOULDERS",
            Self::Legs => "LEGS",
            Self::Neck => "NECK",
            Self::Back => "BACK",
            Self::Belt => "BELT",
            Self::FirstWeapon => "FIRST_WEAPON",
            Self::SecondWeapon => "SECOND_WEAPON",
            Self::LeftHand => "LEFT_HAND",
            Self::RightHand => "RIGHT_HAND",
            Self::Accessory => "ACCESSORY",
            Self::Pet => "PET",
            Self::Mount => "MOUNT",
        }
    }

    /// 1-based position on the planner screen.
    pub fn display_order(self) -> u8 {
        self as u8 + 1
    }

    /// Every slot, sorted ascending by [`as_str`](Self::as_str).
    ///
    /// The sort runs on the string ids rather than trusting any
    /// declaration or map iteration order.
    pub fn lexicographic() -> [EquipmentSlotId; 14] {
        let mut slots = Self::ALL;
        slots.sort_unstable_by_key(|slot| slot.as_str());
        slots
    }
}

impl fmt::Display for EquipmentSlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentSlotId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSlot(s.to_string()))
    }
}
