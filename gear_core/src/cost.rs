//! Cost resolution with explicit override precedence
//!
//! Every resolution is one `Option`-chaining pipeline:
//! assignment override -> price-book entry -> catalogue base cost.
//! A `Some(0)` override is a legitimate free cost and is never coerced to a
//! fallback. All functions here are pure over their inputs.

use crate::equipment::{EquipmentAssignment, EquipmentUpgrade, WeaponAccessory, WeaponProfile};
use crate::expr;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-fighter-template price records (the "equipment list" price book)
///
/// Built by the surrounding persistence layer and handed in as a read-only
/// snapshot; the engine never queries storage mid-computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceBook {
    /// (fighter_type_id, equipment_id) -> cost
    equipment: HashMap<(String, String), i32>,
    /// (fighter_type_id, equipment_id, profile_id) -> cost
    profiles: HashMap<(String, String, String), i32>,
    /// (fighter_type_id, accessory_id) -> cost
    accessories: HashMap<(String, String), i32>,
}

impl PriceBook {
    /// Create an empty price book
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_equipment_price(
        &mut self,
        fighter_type_id: impl Into<String>,
        equipment_id: impl Into<String>,
        cost: i32,
    ) {
        self.equipment
            .insert((fighter_type_id.into(), equipment_id.into()), cost);
    }

    pub fn set_profile_price(
        &mut self,
        fighter_type_id: impl Into<String>,
        equipment_id: impl Into<String>,
        profile_id: impl Into<String>,
        cost: i32,
    ) {
        self.profiles.insert(
            (fighter_type_id.into(), equipment_id.into(), profile_id.into()),
            cost,
        );
    }

    pub fn set_accessory_price(
        &mut self,
        fighter_type_id: impl Into<String>,
        accessory_id: impl Into<String>,
        cost: i32,
    ) {
        self.accessories
            .insert((fighter_type_id.into(), accessory_id.into()), cost);
    }

    pub fn equipment_price(&self, fighter_type_id: &str, equipment_id: &str) -> Option<i32> {
        self.equipment
            .get(&(fighter_type_id.to_string(), equipment_id.to_string()))
            .copied()
    }

    pub fn profile_price(
        &self,
        fighter_type_id: &str,
        equipment_id: &str,
        profile_id: &str,
    ) -> Option<i32> {
        self.profiles
            .get(&(
                fighter_type_id.to_string(),
                equipment_id.to_string(),
                profile_id.to_string(),
            ))
            .copied()
    }

    pub fn accessory_price(&self, fighter_type_id: &str, accessory_id: &str) -> Option<i32> {
        self.accessories
            .get(&(fighter_type_id.to_string(), accessory_id.to_string()))
            .copied()
    }
}

/// Resolve the cost of the assignment's equipment item
pub fn equipment_cost(assignment: &EquipmentAssignment, book: &PriceBook) -> i32 {
    assignment
        .cost_override
        .or_else(|| book.equipment_price(&assignment.fighter_type_id, &assignment.equipment.id))
        .unwrap_or(assignment.equipment.base_cost)
}

/// Resolve the cost of one attached weapon profile
///
/// The assignment's `cost_override` covers the equipment item only; profiles
/// resolve price-book entry -> profile base cost.
pub fn profile_cost(
    assignment: &EquipmentAssignment,
    profile: &WeaponProfile,
    book: &PriceBook,
) -> i32 {
    book.profile_price(
        &assignment.fighter_type_id,
        &assignment.equipment.id,
        &profile.id,
    )
    .unwrap_or(profile.base_cost)
}

/// Resolve the cost of one fitted accessory
///
/// An accessory with a cost expression is priced off the carrying weapon's
/// resolved cost (including any override); a broken expression degrades to
/// the flat `cost` field rather than blocking the roster.
pub fn accessory_cost(
    assignment: &EquipmentAssignment,
    accessory: &WeaponAccessory,
    book: &PriceBook,
) -> i32 {
    if let Some(formula) = &accessory.cost_expression {
        let weapon_cost = equipment_cost(assignment, book);
        return expr::evaluate(formula, weapon_cost).unwrap_or(accessory.cost);
    }

    book.accessory_price(&assignment.fighter_type_id, &accessory.id)
        .unwrap_or(accessory.cost)
}

/// Resolve the cost of one attached upgrade (flat, no override chain)
pub fn upgrade_cost(upgrade: &EquipmentUpgrade) -> i32 {
    upgrade.cost
}

/// Total cost of an assignment: equipment + profiles + accessories + upgrades
pub fn assignment_total_cost(assignment: &EquipmentAssignment, book: &PriceBook) -> i32 {
    let mut total = equipment_cost(assignment, book);
    for profile in &assignment.profiles {
        total += profile_cost(assignment, profile, book);
    }
    for accessory in &assignment.accessories {
        total += accessory_cost(assignment, accessory, book);
    }
    for upgrade in &assignment.upgrades {
        total += upgrade_cost(upgrade);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::EquipmentItem;
    use crate::types::{EquipmentCategory, Rarity};

    fn weapon(id: &str, base_cost: i32) -> EquipmentItem {
        EquipmentItem {
            id: id.to_string(),
            name: id.to_string(),
            category: EquipmentCategory::BasicWeapon,
            rarity: Rarity::Common,
            base_cost,
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
            range_short: String::new(),
            range_long: String::new(),
            accuracy_short: String::new(),
            accuracy_long: String::new(),
            strength: String::new(),
            armour_piercing: String::new(),
            damage: String::new(),
            ammo: String::new(),
            traits: Vec::new(),
        }
    }

    fn accessory(id: &str, cost: i32, expression: Option<&str>) -> WeaponAccessory {
        WeaponAccessory {
            id: id.to_string(),
            name: id.to_string(),
            cost,
            cost_expression: expression.map(|s| s.to_string()),
            modifiers: Vec::new(),
        }
    }

    #[test]
    fn test_override_beats_price_book_and_base() {
        let mut assignment = EquipmentAssignment::new("ft-1", weapon("bolter", 55));
        assignment.cost_override = Some(40);

        let mut book = PriceBook::new();
        book.set_equipment_price("ft-1", "bolter", 45);

        assert_eq!(equipment_cost(&assignment, &book), 40);
    }

    #[test]
    fn test_zero_override_means_free() {
        let mut assignment = EquipmentAssignment::new("ft-1", weapon("bolter", 55));
        assignment.cost_override = Some(0);

        let mut book = PriceBook::new();
        book.set_equipment_price("ft-1", "bolter", 45);

        assert_eq!(equipment_cost(&assignment, &book), 0);
    }

    #[test]
    fn test_price_book_beats_base() {
        let assignment = EquipmentAssignment::new("ft-1", weapon("bolter", 55));

        let mut book = PriceBook::new();
        book.set_equipment_price("ft-1", "bolter", 45);

        assert_eq!(equipment_cost(&assignment, &book), 45);
    }

    #[test]
    fn test_base_cost_fallback() {
        let assignment = EquipmentAssignment::new("ft-1", weapon("bolter", 55));
        assert_eq!(equipment_cost(&assignment, &PriceBook::new()), 55);
    }

    #[test]
    fn test_price_book_is_per_fighter_type() {
        let assignment = EquipmentAssignment::new("ft-1", weapon("bolter", 55));

        let mut book = PriceBook::new();
        book.set_equipment_price("ft-2", "bolter", 30);

        assert_eq!(equipment_cost(&assignment, &book), 55);
    }

    #[test]
    fn test_profile_cost_precedence() {
        let mut assignment = EquipmentAssignment::new("ft-1", weapon("lasgun", 15));
        let hotshot = profile("hotshot", "lasgun", 20);
        assignment.profiles.push(hotshot.clone());

        let mut book = PriceBook::new();
        assert_eq!(profile_cost(&assignment, &hotshot, &book), 20);

        book.set_profile_price("ft-1", "lasgun", "hotshot", 10);
        assert_eq!(profile_cost(&assignment, &hotshot, &book), 10);
    }

    #[test]
    fn test_accessory_expression_uses_resolved_weapon_cost() {
        let sight = accessory("sight", 0, Some("round(cost_int * 0.25 / 5) * 5"));

        let mut assignment = EquipmentAssignment::new("ft-1", weapon("longrifle", 100));
        assignment.accessories.push(sight.clone());
        let book = PriceBook::new();
        assert_eq!(accessory_cost(&assignment, &sight, &book), 25);

        // Overriding the weapon reprices the accessory too
        assignment.cost_override = Some(60);
        assert_eq!(accessory_cost(&assignment, &sight, &book), 15);

        assignment.cost_override = Some(0);
        assert_eq!(accessory_cost(&assignment, &sight, &book), 0);
    }

    #[test]
    fn test_broken_expression_falls_back_to_flat_cost() {
        let sight = accessory("sight", 10, Some("round(cost_int *"));
        let assignment = EquipmentAssignment::new("ft-1", weapon("longrifle", 100));
        assert_eq!(accessory_cost(&assignment, &sight, &PriceBook::new()), 10);
    }

    #[test]
    fn test_accessory_price_book_precedence() {
        let suspensor = accessory("suspensor", 60, None);
        let assignment = EquipmentAssignment::new("ft-1", weapon("heavy_stubber", 130));

        let mut book = PriceBook::new();
        assert_eq!(accessory_cost(&assignment, &suspensor, &book), 60);

        book.set_accessory_price("ft-1", "suspensor", 40);
        assert_eq!(accessory_cost(&assignment, &suspensor, &book), 40);
    }

    #[test]
    fn test_total_cost_sums_all_parts() {
        let mut assignment = EquipmentAssignment::new("ft-1", weapon("lasgun", 15));
        assignment.profiles.push(profile("standard", "lasgun", 0));
        assignment.profiles.push(profile("hotshot", "lasgun", 20));
        assignment.accessories.push(accessory("sight", 0, Some("round(cost_int)")));
        assignment.upgrades.push(EquipmentUpgrade {
            id: "mk2".to_string(),
            equipment_id: "lasgun".to_string(),
            name: "Mk II".to_string(),
            position: 1,
            cost: 10,
            modifiers: Vec::new(),
        });

        let book = PriceBook::new();
        // 15 equipment + 0 + 20 profiles + 15 accessory + 10 upgrade
        assert_eq!(assignment_total_cost(&assignment, &book), 60);
    }

    #[test]
    fn test_total_cost_ignores_accessory_order() {
        let flat = accessory("suspensor", 60, None);
        let booked = accessory("gunshroud", 10, None);
        let formula = accessory("sight", 0, Some("round(cost_int * 0.25 / 5) * 5"));

        let mut book = PriceBook::new();
        book.set_accessory_price("ft-1", "gunshroud", 20);

        let mut forward = EquipmentAssignment::new("ft-1", weapon("heavy_stubber", 130));
        forward.accessories = vec![flat.clone(), booked.clone(), formula.clone()];

        let mut reversed = EquipmentAssignment::new("ft-1", weapon("heavy_stubber", 130));
        reversed.accessories = vec![formula, booked, flat];

        // 130 equipment + 60 flat + 20 booked + 35 formula
        assert_eq!(assignment_total_cost(&forward, &book), 245);
        assert_eq!(
            assignment_total_cost(&forward, &book),
            assignment_total_cost(&reversed, &book)
        );
    }

    #[test]
    fn test_total_cost_is_idempotent() {
        let mut assignment = EquipmentAssignment::new("ft-1", weapon("lasgun", 15));
        assignment
            .accessories
            .push(accessory("sight", 0, Some("round(cost_int * 0.25 / 5) * 5")));

        let book = PriceBook::new();
        let first = assignment_total_cost(&assignment, &book);
        let second = assignment_total_cost(&assignment, &book);
        assert_eq!(first, second);
    }
}
