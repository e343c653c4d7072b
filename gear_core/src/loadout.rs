//! Unified read-only view over real, default, and hypothetical assignments
//!
//! Rosters render three kinds of "a fighter has this equipment": a persisted
//! assignment record, a default-loadout template on the fighter type, and a
//! preview of equipment the fighter does not own yet. All three answer the
//! same read contract here, so display code has one path.

use crate::cost::{self, PriceBook};
use crate::equipment::{
    EquipmentAssignment, EquipmentItem, EquipmentUpgrade, WeaponAccessory, WeaponProfile,
};
use crate::modifier::Modifier;
use serde::{Deserialize, Serialize};

/// A fighter-type default-loadout entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultAssignment {
    pub id: String,
    pub fighter_type_id: String,
    pub equipment: EquipmentItem,
    #[serde(default)]
    pub profiles: Vec<WeaponProfile>,
}

/// Where an assignment view gets its data
#[derive(Debug, Clone)]
pub enum AssignmentSource {
    /// A persisted assignment record; the full override chain applies
    Persisted(EquipmentAssignment),
    /// A fighter-type default; no record exists to carry overrides
    Default(DefaultAssignment),
    /// Equipment the fighter could add; nothing persisted at all
    Potential {
        equipment: EquipmentItem,
        profiles: Vec<WeaponProfile>,
    },
}

/// One read contract over all three assignment sources
#[derive(Debug, Clone)]
pub struct AssignmentView {
    source: AssignmentSource,
}

impl AssignmentView {
    pub fn from_assignment(assignment: EquipmentAssignment) -> Self {
        AssignmentView {
            source: AssignmentSource::Persisted(assignment),
        }
    }

    pub fn from_default(default: DefaultAssignment) -> Self {
        AssignmentView {
            source: AssignmentSource::Default(default),
        }
    }

    pub fn potential(equipment: EquipmentItem, profiles: Vec<WeaponProfile>) -> Self {
        AssignmentView {
            source: AssignmentSource::Potential {
                equipment,
                profiles,
            },
        }
    }

    pub fn source(&self) -> &AssignmentSource {
        &self.source
    }

    pub fn equipment(&self) -> &EquipmentItem {
        match &self.source {
            AssignmentSource::Persisted(a) => &a.equipment,
            AssignmentSource::Default(d) => &d.equipment,
            AssignmentSource::Potential { equipment, .. } => equipment,
        }
    }

    pub fn name(&self) -> &str {
        &self.equipment().name
    }

    /// Resolved total cost
    ///
    /// Default and potential sources have no backing record, so no override
    /// applies: equipment and profile base costs, zero accessory/upgrade
    /// cost.
    pub fn total_cost(&self, book: &PriceBook) -> i32 {
        match &self.source {
            AssignmentSource::Persisted(a) => cost::assignment_total_cost(a, book),
            AssignmentSource::Default(d) => {
                d.equipment.base_cost + d.profiles.iter().map(|p| p.base_cost).sum::<i32>()
            }
            AssignmentSource::Potential {
                equipment,
                profiles,
            } => equipment.base_cost + profiles.iter().map(|p| p.base_cost).sum::<i32>(),
        }
    }

    pub fn weapon_profiles(&self) -> &[WeaponProfile] {
        match &self.source {
            AssignmentSource::Persisted(a) => &a.profiles,
            AssignmentSource::Default(d) => &d.profiles,
            AssignmentSource::Potential { profiles, .. } => profiles,
        }
    }

    /// Cost-0 profiles, included with the weapon on every source
    pub fn standard_profiles(&self) -> Vec<&WeaponProfile> {
        self.weapon_profiles()
            .iter()
            .filter(|p| p.is_standard())
            .collect()
    }

    pub fn weapon_accessories(&self) -> &[WeaponAccessory] {
        match &self.source {
            AssignmentSource::Persisted(a) => &a.accessories,
            _ => &[],
        }
    }

    pub fn active_upgrade(&self) -> Option<&EquipmentUpgrade> {
        match &self.source {
            AssignmentSource::Persisted(a) => a.active_upgrade(),
            _ => None,
        }
    }

    /// Modifiers contributed by this view's carriers
    ///
    /// Only persisted assignments carry accessories and upgrades; default
    /// and potential sources contribute the equipment item's own modifiers.
    pub fn modifiers(&self) -> Vec<&Modifier> {
        match &self.source {
            AssignmentSource::Persisted(a) => {
                let mut mods: Vec<&Modifier> = a.equipment.modifiers.iter().collect();
                for accessory in &a.accessories {
                    mods.extend(accessory.modifiers.iter());
                }
                for upgrade in &a.upgrades {
                    mods.extend(upgrade.modifiers.iter());
                }
                mods
            }
            _ => self.equipment().modifiers.iter().collect(),
        }
    }
}
