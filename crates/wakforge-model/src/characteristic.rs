//! Characteristic point allocation.
//!
//! Characteristics come in five fixed groups. Each group is a plain struct
//! with one named counter per characteristic. [`Characteristic`] names
//! every counter individually so code that walks all of them (the
//! build-code schema, for one) goes through a single table instead of
//! touching struct fields by hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Intelligence group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Intelligence {
    pub percent_health_points: u16,
    pub elemental_resistance: u16,
    pub barrier: u16,
    pub percent_heals_received: u16,
    pub percent_armor_health_points: u16,
}

/// Strength group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Strength {
    pub elemental_mastery: u16,
    pub melee_mastery: u16,
    pub distance_mastery: u16,
    pub health_points: u16,
}

/// Agility group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Agility {
    pub lock: u16,
    pub dodge: u16,
    pub initiative: u16,
    pub lock_and_dodge: u16,
    pub force_of_will: u16,
}

/// Fortune group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fortune {
    pub percent_critical_hit: u16,
    pub percent_block: u16,
    pub critical_mastery: u16,
    pub rear_mastery: u16,
    pub berserk_mastery: u16,
    pub healing_mastery: u16,
    pub rear_resistance: u16,
    pub critical_resistance: u16,
}

/// Major group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Major {
    pub action_points: u16,
    pub movement_points_and_damage: u16,
    pub range_and_damage: u16,
    pub wakfu_points: u16,
    pub control_and_damage: u16,
    pub percent_damage_inflicted: u16,
    pub elemental_resistance: u16,
}

/// All five characteristic groups of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Characteristics {
    pub intelligence: Intelligence,
    pub strength: Strength,
    pub agility: Agility,
    pub fortune: Fortune,
    pub major: Major,
}

impl Characteristics {
    /// Total points spent across every group.
    pub fn total(&self) -> u32 {
        Characteristic::ALL
            .iter()
            .map(|c| u32::from(self.get(*c)))
            .sum()
    }
}

/// The group a characteristic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacteristicGroup {
    Intelligence,
    Strength,
    Agility,
    Fortune,
    Major,
}

impl fmt::Display for CharacteristicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intelligence => "intelligence",
            Self::Strength => "strength",
            Self::Agility => "agility",
            Self::Fortune => "fortune",
            Self::Major => "major",
        };
        f.write_str(name)
    }
}

// One table drives the enum, its metadata, and field access, so a counter
// can't be added to one and forgotten in another.
macro_rules! characteristic_table {
    ($(
        $group_variant:ident / $group:ident {
            $( $variant:ident => $field:ident : $name:literal ),+ $(,)?
        }
    )+) => {
        /// One named characteristic counter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Characteristic {
            $( $( $variant, )+ )+
        }

        impl Characteristic {
            /// Every characteristic, grouped and in declaration order.
            pub const ALL: [Characteristic; 29] = [
                $( $( Characteristic::$variant, )+ )+
            ];

            /// The group this characteristic is allocated in.
            pub fn group(self) -> CharacteristicGroup {
                match self {
                    $( $( Characteristic::$variant => CharacteristicGroup::$group_variant, )+ )+
                }
            }

            /// The field name inside its group, e.g. `"lockAndDodge"`.
            pub fn name(self) -> &'static str {
                match self {
                    $( $( Characteristic::$variant => $name, )+ )+
                }
            }
        }

        impl Characteristics {
            /// Reads one characteristic.
            pub fn get(&self, which: Characteristic) -> u16 {
                match which {
                    $( $( Characteristic::$variant => self.$group.$field, )+ )+
                }
            }

            /// Mutable access to one characteristic.
            pub fn get_mut(&mut self, which: Characteristic) -> &mut u16 {
                match which {
                    $( $( Characteristic::$variant => &mut self.$group.$field, )+ )+
                }
            }

            /// Writes one characteristic.
            pub fn set(&mut self, which: Characteristic, value: u16) {
                *self.get_mut(which) = value;
            }
        }
    };
}

characteristic_table! {
    Intelligence / intelligence {
        PercentHealthPoints => percent_health_points: "percentHealthPoints",
        IntelligenceElementalResistance => elemental_resistance: "elementalResistance",
        Barrier => barrier: "barrier",
        PercentHealsReceived => percent_heals_received: "percentHealsReceived",
        PercentArmorHealthPoints => percent_armor_health_points: "percentArmorHealthPoints",
    }
    Strength / strength {
        ElementalMastery => elemental_mastery: "elementalMastery",
        MeleeMastery => melee_mastery: "meleeMastery",
        DistanceMastery => distance_mastery: "distanceMastery",
        HealthPoints => health_points: "healthPoints",
    }
    Agility / agility {
        Lock => lock: "lock",
        Dodge => dodge: "dodge",
        Initiative => initiative: "initiative",
        LockAndDodge => lock_and_dodge: "lockAndDodge",
        ForceOfWill => force_of_will: "forceOfWill",
    }
    Fortune / fortune {
        PercentCriticalHit => percent_critical_hit: "percentCriticalHit",
        PercentBlock => percent_block: "percentBlock",
        CriticalMastery => critical_mastery: "criticalMastery",
        RearMastery => rear_mastery: "rearMastery",
        BerserkMastery => berserk_mastery: "berserkMastery",
        HealingMastery => healing_mastery: "healingMastery",
        RearResistance => rear_resistance: "rearResistance",
        CriticalResistance => critical_resistance: "criticalResistance",
    }
    Major / major {
        ActionPoints => action_points: "actionPoints",
        MovementPointsAndDamage => movement_points_and_damage: "movementPointsAndDamage",
        RangeAndDamage => range_and_damage: "rangeAndDamage",
        WakfuPoints => wakfu_points: "wakfuPoints",
        ControlAndDamage => control_and_damage: "controlAndDamage",
        PercentDamageInflicted => percent_damage_inflicted: "percentDamageInflicted",
        MajorElementalResistance => elemental_resistance: "elementalResistance",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_29_distinct_characteristics() {
        let mut seen = std::collections::HashSet::new();
        for c in Characteristic::ALL {
            assert!(seen.insert(c), "{c:?} listed twice");
        }
        assert_eq!(seen.len(), 29);
    }

    #[test]
    fn test_set_then_get_touches_only_one_field() {
        let mut stats = Characteristics::default();
        stats.set(Characteristic::LockAndDodge, 12);

        assert_eq!(stats.agility.lock_and_dodge, 12);
        assert_eq!(stats.get(Characteristic::LockAndDodge), 12);
        assert_eq!(stats.total(), 12);
    }

    #[test]
    fn test_elemental_resistance_exists_in_two_groups() {
        let mut stats = Characteristics::default();
        stats.set(Characteristic::IntelligenceElementalResistance, 3);
        stats.set(Characteristic::MajorElementalResistance, 1);

        assert_eq!(stats.intelligence.elemental_resistance, 3);
        assert_eq!(stats.major.elemental_resistance, 1);
        assert_eq!(
            Characteristic::IntelligenceElementalResistance.name(),
            Characteristic::MajorElementalResistance.name()
        );
    }

    #[test]
    fn test_groups_follow_declaration_order() {
        let groups: Vec<CharacteristicGroup> =
            Characteristic::ALL.iter().map(|c| c.group()).collect();
        assert_eq!(groups[0], CharacteristicGroup::Intelligence);
        assert_eq!(groups[5], CharacteristicGroup::Strength);
        assert_eq!(groups[9], CharacteristicGroup::Agility);
        assert_eq!(groups[14], CharacteristicGroup::Fortune);
        assert_eq!(groups[22], CharacteristicGroup::Major);
        assert_eq!(groups[28], CharacteristicGroup::Major);
    }

    #[test]
    fn test_serde_uses_camel_case_and_defaults_missing_fields() {
        let json = r#"{ "agility": { "forceOfWill": 4 } }"#;
        let stats: Characteristics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.agility.force_of_will, 4);
        assert_eq!(stats.total(), 4);
    }
}
