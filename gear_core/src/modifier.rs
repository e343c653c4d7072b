//! Modifier variants carried by equipment, accessories, and upgrades
//!
//! A modifier is active whenever its carrier is assigned to a fighter.
//! Upgrade modifiers only count while that specific upgrade is attached to
//! the assignment, not while it is merely available in the catalogue.

use crate::equipment::EquipmentAssignment;
use serde::{Deserialize, Serialize};

/// How a stat modifier changes its target stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatModifierMode {
    /// Move the stat toward better-for-the-fighter
    Improve,
    /// Move the stat toward worse-for-the-fighter
    Worsen,
    /// Replace the stat value outright
    Set,
}

/// A change to one named stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    /// Target stat field name (e.g. "weapon_skill")
    pub stat: String,
    pub mode: StatModifierMode,
    /// Step amount for improve/worsen, or the literal token for set
    pub value: String,
}

impl StatModifier {
    /// The numeric step for improve/worsen modes
    ///
    /// Returns `None` when the value has no leading integer, which callers
    /// treat as a no-op.
    pub fn amount(&self) -> Option<i64> {
        let digits: String = self
            .value
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        digits.parse().ok()
    }
}

/// Whether a trait modifier adds or removes its trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitModifierMode {
    Add,
    Remove,
}

/// A change to a weapon profile's trait list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitModifier {
    pub trait_name: String,
    pub mode: TraitModifierMode,
}

/// How a skill access modifier changes category access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillAccessMode {
    AddPrimary,
    RemovePrimary,
    AddSecondary,
    RemoveSecondary,
    /// Remove from both sets; sticky for the rest of one resolution
    Disable,
}

/// A change to a fighter's skill-tree category access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAccessModifier {
    pub skill_category: String,
    pub mode: SkillAccessMode,
}

/// The closed modifier family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Modifier {
    Stat(StatModifier),
    Trait(TraitModifier),
    SkillAccess(SkillAccessModifier),
}

impl Modifier {
    pub fn is_stat(&self) -> bool {
        matches!(self, Modifier::Stat(_))
    }

    pub fn is_trait(&self) -> bool {
        matches!(self, Modifier::Trait(_))
    }

    pub fn is_skill_access(&self) -> bool {
        matches!(self, Modifier::SkillAccess(_))
    }

    /// Shorthand constructor for stat modifiers
    pub fn stat(stat: impl Into<String>, mode: StatModifierMode, value: impl Into<String>) -> Self {
        Modifier::Stat(StatModifier {
            stat: stat.into(),
            mode,
            value: value.into(),
        })
    }

    /// Shorthand constructor for trait modifiers
    pub fn trait_mod(trait_name: impl Into<String>, mode: TraitModifierMode) -> Self {
        Modifier::Trait(TraitModifier {
            trait_name: trait_name.into(),
            mode,
        })
    }

    /// Shorthand constructor for skill access modifiers
    pub fn skill_access(skill_category: impl Into<String>, mode: SkillAccessMode) -> Self {
        Modifier::SkillAccess(SkillAccessModifier {
            skill_category: skill_category.into(),
            mode,
        })
    }
}

/// Gather every active modifier across a fighter's assignments
///
/// Order is stable: assignment insertion order, and within one assignment
/// the equipment item's modifiers, then each accessory's, then each attached
/// upgrade's. Statline and skill resolution depend on this order.
pub fn active_modifiers(assignments: &[EquipmentAssignment]) -> Vec<&Modifier> {
    let mut mods = Vec::new();
    for assignment in assignments {
        mods.extend(assignment.equipment.modifiers.iter());
        for accessory in &assignment.accessories {
            mods.extend(accessory.modifiers.iter());
        }
        for upgrade in &assignment.upgrades {
            mods.extend(upgrade.modifiers.iter());
        }
    }
    mods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentAssignment, EquipmentItem, EquipmentUpgrade, WeaponAccessory};
    use crate::types::EquipmentCategory;

    fn item_with_mod(id: &str, modifier: Modifier) -> EquipmentItem {
        EquipmentItem {
            id: id.to_string(),
            name: id.to_string(),
            category: EquipmentCategory::Wargear,
            rarity: Default::default(),
            base_cost: 10,
            is_weapon: false,
            modifiers: vec![modifier],
        }
    }

    #[test]
    fn test_amount_parsing() {
        let m = StatModifier {
            stat: "strength".to_string(),
            mode: StatModifierMode::Improve,
            value: "1".to_string(),
        };
        assert_eq!(m.amount(), Some(1));

        let m = StatModifier {
            stat: "strength".to_string(),
            mode: StatModifierMode::Set,
            value: "4+".to_string(),
        };
        assert_eq!(m.amount(), Some(4));

        let m = StatModifier {
            stat: "strength".to_string(),
            mode: StatModifierMode::Set,
            value: "*".to_string(),
        };
        assert_eq!(m.amount(), None);
    }

    #[test]
    fn test_gather_order_is_assignment_order() {
        let first = EquipmentAssignment::new(
            "ft-1",
            item_with_mod("a", Modifier::stat("strength", StatModifierMode::Improve, "1")),
        );
        let second = EquipmentAssignment::new(
            "ft-1",
            item_with_mod("b", Modifier::stat("strength", StatModifierMode::Worsen, "1")),
        );

        let assignments = [first, second];
        let mods = active_modifiers(&assignments);
        assert_eq!(mods.len(), 2);
        assert!(matches!(
            mods[0],
            Modifier::Stat(StatModifier {
                mode: StatModifierMode::Improve,
                ..
            })
        ));
    }

    #[test]
    fn test_accessory_and_upgrade_modifiers_are_active() {
        let mut assignment = EquipmentAssignment::new("ft-1", item_with_mod("a", Modifier::stat(
            "strength",
            StatModifierMode::Improve,
            "1",
        )));
        assignment.accessories.push(WeaponAccessory {
            id: "acc".to_string(),
            name: "Scope".to_string(),
            cost: 0,
            cost_expression: None,
            modifiers: vec![Modifier::trait_mod("Accurate", TraitModifierMode::Add)],
        });
        assignment.upgrades.push(EquipmentUpgrade {
            id: "up".to_string(),
            equipment_id: "a".to_string(),
            name: "Mk II".to_string(),
            position: 1,
            cost: 5,
            modifiers: vec![Modifier::skill_access("Agility", SkillAccessMode::AddPrimary)],
        });

        let assignments = vec![assignment];
        let mods = active_modifiers(&assignments);
        assert_eq!(mods.len(), 3);
        assert!(mods[1].is_trait());
        assert!(mods[2].is_skill_access());
    }
}
