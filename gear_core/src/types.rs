use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity / availability classification on equipment
///
/// Used by surrounding UI filtering only; the cost engine carries it but
/// never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Illegal,
    Exclusive,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Rare => write!(f, "Rare"),
            Rarity::Illegal => write!(f, "Illegal"),
            Rarity::Exclusive => write!(f, "Exclusive"),
        }
    }
}

/// Coarse equipment categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    // Weapons
    BasicWeapon,
    Pistol,
    SpecialWeapon,
    HeavyWeapon,
    CloseCombat,
    Grenade,
    // Protective
    Armour,
    FieldArmour,
    // Everything else
    Wargear,
    StatusItem,
    VehicleUpgrade,
}

impl EquipmentCategory {
    pub fn is_weapon(&self) -> bool {
        matches!(
            self,
            EquipmentCategory::BasicWeapon
                | EquipmentCategory::Pistol
                | EquipmentCategory::SpecialWeapon
                | EquipmentCategory::HeavyWeapon
                | EquipmentCategory::CloseCombat
                | EquipmentCategory::Grenade
        )
    }

    pub fn is_armour(&self) -> bool {
        matches!(
            self,
            EquipmentCategory::Armour | EquipmentCategory::FieldArmour
        )
    }
}

/// Fighter categories used for rule matching and list limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FighterCategory {
    Leader,
    Champion,
    Ganger,
    Juve,
    Prospect,
    Specialist,
    Crew,
    Vehicle,
}

impl FighterCategory {
    /// Get all fighter categories
    pub fn all() -> &'static [FighterCategory] {
        &[
            FighterCategory::Leader,
            FighterCategory::Champion,
            FighterCategory::Ganger,
            FighterCategory::Juve,
            FighterCategory::Prospect,
            FighterCategory::Specialist,
            FighterCategory::Crew,
            FighterCategory::Vehicle,
        ]
    }
}

impl fmt::Display for FighterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FighterCategory::Leader => write!(f, "Leader"),
            FighterCategory::Champion => write!(f, "Champion"),
            FighterCategory::Ganger => write!(f, "Ganger"),
            FighterCategory::Juve => write!(f, "Juve"),
            FighterCategory::Prospect => write!(f, "Prospect"),
            FighterCategory::Specialist => write!(f, "Specialist"),
            FighterCategory::Crew => write!(f, "Crew"),
            FighterCategory::Vehicle => write!(f, "Vehicle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_categories() {
        assert!(EquipmentCategory::BasicWeapon.is_weapon());
        assert!(EquipmentCategory::Grenade.is_weapon());
        assert!(!EquipmentCategory::Wargear.is_weapon());
        assert!(!EquipmentCategory::Armour.is_weapon());
        assert!(EquipmentCategory::FieldArmour.is_armour());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&EquipmentCategory::HeavyWeapon).unwrap();
        assert_eq!(json, "\"heavy_weapon\"");
        let cat: FighterCategory = serde_json::from_str("\"leader\"").unwrap();
        assert_eq!(cat, FighterCategory::Leader);
    }
}
