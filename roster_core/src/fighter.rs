//! Fighter templates and fighter instances
//!
//! A `FighterType` is the template: base cost, ordered statline, house,
//! declared skill category sets. A `Fighter` is one roster entry carrying
//! its equipment assignments. Both are read-only snapshots during a
//! resolution call.

use crate::metadata::StatMetadataRegistry;
use crate::skills::{resolve_skill_access, SkillAccess};
use crate::statline::{resolve_statline, ResolvedStat};
use gear_core::cost::{assignment_total_cost, PriceBook};
use gear_core::equipment::EquipmentAssignment;
use gear_core::modifier::{active_modifiers, Modifier};
use gear_core::types::FighterCategory;
use serde::{Deserialize, Serialize};

/// One named stat and its base display token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub field: String,
    pub value: String,
}

/// The standard 12-stat fighter line, in display order
pub const STANDARD_STAT_FIELDS: [&str; 12] = [
    "movement",
    "weapon_skill",
    "ballistic_skill",
    "strength",
    "toughness",
    "wounds",
    "initiative",
    "attacks",
    "leadership",
    "cool",
    "willpower",
    "intelligence",
];

/// Build a standard 12-stat statline from values in display order
pub fn standard_statline(values: [&str; 12]) -> Vec<StatEntry> {
    STANDARD_STAT_FIELDS
        .iter()
        .zip(values)
        .map(|(field, value)| StatEntry {
            field: field.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// A fighter template
///
/// `statline` is ordered; vehicles and other exotic types simply carry a
/// different list of fields (with metadata overlaid from config).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterType {
    pub id: String,
    pub name: String,
    pub house: String,
    pub category: FighterCategory,
    pub base_cost: i32,
    pub statline: Vec<StatEntry>,
    #[serde(default)]
    pub primary_skills: Vec<String>,
    #[serde(default)]
    pub secondary_skills: Vec<String>,
}

/// One fighter on a roster, with its equipment snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub id: String,
    pub name: String,
    pub fighter_type: FighterType,
    #[serde(default)]
    pub assignments: Vec<EquipmentAssignment>,
}

impl Fighter {
    /// Create a fighter with no equipment
    pub fn new(id: impl Into<String>, name: impl Into<String>, fighter_type: FighterType) -> Self {
        Fighter {
            id: id.into(),
            name: name.into(),
            fighter_type,
            assignments: Vec::new(),
        }
    }

    /// Every modifier active on this fighter, in assignment order
    pub fn active_modifiers(&self) -> Vec<&Modifier> {
        active_modifiers(&self.assignments)
    }

    /// Template cost plus every assignment's resolved total
    pub fn total_cost(&self, book: &PriceBook) -> i32 {
        self.fighter_type.base_cost
            + self
                .assignments
                .iter()
                .map(|a| assignment_total_cost(a, book))
                .sum::<i32>()
    }

    /// The displayed statline after all active modifiers
    pub fn statline(&self, registry: &StatMetadataRegistry) -> Vec<ResolvedStat> {
        resolve_statline(&self.fighter_type, &self.active_modifiers(), registry)
    }

    /// Skill category access after all active modifiers
    pub fn skill_access(&self) -> SkillAccess {
        resolve_skill_access(&self.fighter_type, &self.active_modifiers())
    }
}
