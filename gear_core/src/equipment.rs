//! Equipment entities and assignment records
//!
//! These are read-only inputs to the cost and statline engines. The
//! surrounding persistence layer owns and mutates them; one resolution call
//! sees a fixed snapshot.

use crate::modifier::Modifier;
use crate::types::{EquipmentCategory, Rarity};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A catalogue equipment item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub category: EquipmentCategory,
    #[serde(default)]
    pub rarity: Rarity,
    /// Catalogue cost in credits, before any override
    pub base_cost: i32,
    #[serde(default)]
    pub is_weapon: bool,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// One firing/attack profile belonging to an equipment item
///
/// Stat fields are short display tokens (`"12\""`, `"+1"`, `"-"`); the
/// engine only ever moves them around, never does arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponProfile {
    pub id: String,
    pub equipment_id: String,
    pub name: String,
    /// 0 = standard profile, included with the weapon
    #[serde(default)]
    pub base_cost: i32,
    #[serde(default)]
    pub range_short: String,
    #[serde(default)]
    pub range_long: String,
    #[serde(default)]
    pub accuracy_short: String,
    #[serde(default)]
    pub accuracy_long: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub armour_piercing: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub ammo: String,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl WeaponProfile {
    /// Standard profiles are included with the weapon at no extra cost
    pub fn is_standard(&self) -> bool {
        self.base_cost == 0
    }
}

/// An accessory fitted to a carried weapon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponAccessory {
    pub id: String,
    pub name: String,
    /// Flat cost, also the fallback when `cost_expression` fails to evaluate
    #[serde(default)]
    pub cost: i32,
    /// Optional formula over the carrying weapon's resolved cost (`cost_int`)
    #[serde(default)]
    pub cost_expression: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// A ranked upgrade belonging to an equipment item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentUpgrade {
    pub id: String,
    pub equipment_id: String,
    pub name: String,
    /// Rank within the upgrade ladder; the highest attached rank is "active"
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub cost: i32,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// A fighter's persisted link to one equipment item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentAssignment {
    /// Fighter template this assignment belongs to (price-book key)
    pub fighter_type_id: String,
    pub equipment: EquipmentItem,
    /// Explicit total override for the equipment cost; `Some(0)` means free
    #[serde(default)]
    pub cost_override: Option<i32>,
    #[serde(default)]
    pub profiles: Vec<WeaponProfile>,
    #[serde(default)]
    pub accessories: Vec<WeaponAccessory>,
    #[serde(default)]
    pub upgrades: Vec<EquipmentUpgrade>,
    /// The default-assignment template this record originated from, if any
    #[serde(default)]
    pub from_default: Option<String>,
}

impl EquipmentAssignment {
    /// Create a bare assignment with no profiles, accessories, or upgrades
    pub fn new(fighter_type_id: impl Into<String>, equipment: EquipmentItem) -> Self {
        EquipmentAssignment {
            fighter_type_id: fighter_type_id.into(),
            equipment,
            cost_override: None,
            profiles: Vec::new(),
            accessories: Vec::new(),
            upgrades: Vec::new(),
            from_default: None,
        }
    }

    /// The highest-ranked attached upgrade, if any
    pub fn active_upgrade(&self) -> Option<&EquipmentUpgrade> {
        self.upgrades.iter().max_by_key(|u| u.position)
    }

    /// Attached profiles included with the weapon at no extra cost
    pub fn standard_profiles(&self) -> Vec<&WeaponProfile> {
        self.profiles.iter().filter(|p| p.is_standard()).collect()
    }

    /// Check relational integrity before handing the assignment to compute
    /// paths, which assume valid inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for profile in &self.profiles {
            if profile.equipment_id != self.equipment.id {
                return Err(ValidationError::ProfileEquipmentMismatch {
                    profile: profile.id.clone(),
                    expected: profile.equipment_id.clone(),
                    actual: self.equipment.id.clone(),
                });
            }
        }
        for upgrade in &self.upgrades {
            if upgrade.equipment_id != self.equipment.id {
                return Err(ValidationError::UpgradeEquipmentMismatch {
                    upgrade: upgrade.id.clone(),
                    expected: upgrade.equipment_id.clone(),
                    actual: self.equipment.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for EquipmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}

/// Relational errors surfaced at data-entry time, never during cost display
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("profile '{profile}' belongs to equipment '{expected}', not '{actual}'")]
    ProfileEquipmentMismatch {
        profile: String,
        expected: String,
        actual: String,
    },
    #[error("upgrade '{upgrade}' belongs to equipment '{expected}', not '{actual}'")]
    UpgradeEquipmentMismatch {
        upgrade: String,
        expected: String,
        actual: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EquipmentCategory;

    fn lasgun() -> EquipmentItem {
        EquipmentItem {
            id: "lasgun".to_string(),
            name: "Lasgun".to_string(),
            category: EquipmentCategory::BasicWeapon,
            rarity: Rarity::Common,
            base_cost: 15,
            is_weapon: true,
            modifiers: Vec::new(),
        }
    }

    fn profile(id: &str, equipment_id: &str, base_cost: i32) -> WeaponProfile {
        WeaponProfile {
            id: id.to_string(),
            equipment_id: equipment_id.to_string(),
            name: id.to_string(),
            base_cost,
            range_short: "18\"".to_string(),
            range_long: "24\"".to_string(),
            accuracy_short: "+1".to_string(),
            accuracy_long: "-".to_string(),
            strength: "3".to_string(),
            armour_piercing: "-".to_string(),
            damage: "1".to_string(),
            ammo: "2+".to_string(),
            traits: vec!["Plentiful".to_string()],
        }
    }

    #[test]
    fn test_active_upgrade_is_highest_position() {
        let mut assignment = EquipmentAssignment::new("ft-1", lasgun());
        for (id, position) in [("mk1", 1), ("mk3", 3), ("mk2", 2)] {
            assignment.upgrades.push(EquipmentUpgrade {
                id: id.to_string(),
                equipment_id: "lasgun".to_string(),
                name: id.to_string(),
                position,
                cost: 5,
                modifiers: Vec::new(),
            });
        }
        assert_eq!(assignment.active_upgrade().unwrap().id, "mk3");
    }

    #[test]
    fn test_standard_profiles_are_cost_zero() {
        let mut assignment = EquipmentAssignment::new("ft-1", lasgun());
        assignment.profiles.push(profile("standard", "lasgun", 0));
        assignment.profiles.push(profile("hotshot", "lasgun", 20));

        let standard = assignment.standard_profiles();
        assert_eq!(standard.len(), 1);
        assert_eq!(standard[0].id, "standard");
    }

    #[test]
    fn test_validate_rejects_foreign_upgrade() {
        let mut assignment = EquipmentAssignment::new("ft-1", lasgun());
        assignment.upgrades.push(EquipmentUpgrade {
            id: "wrong".to_string(),
            equipment_id: "autogun".to_string(),
            name: "Wrong".to_string(),
            position: 1,
            cost: 5,
            modifiers: Vec::new(),
        });
        assert!(matches!(
            assignment.validate(),
            Err(ValidationError::UpgradeEquipmentMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_foreign_profile() {
        let mut assignment = EquipmentAssignment::new("ft-1", lasgun());
        assignment.profiles.push(profile("p", "autogun", 0));
        assert!(matches!(
            assignment.validate(),
            Err(ValidationError::ProfileEquipmentMismatch { .. })
        ));
    }

    #[test]
    fn test_assignment_json_round_trip() {
        let mut assignment = EquipmentAssignment::new("ft-1", lasgun());
        assignment.cost_override = Some(0);
        assignment.profiles.push(profile("standard", "lasgun", 0));

        let json = serde_json::to_string(&assignment).unwrap();
        let back: EquipmentAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cost_override, Some(0));
        assert_eq!(back.profiles.len(), 1);
        assert_eq!(back.equipment.id, "lasgun");
    }
}
