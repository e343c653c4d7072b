//! gear_core - Equipment, modifiers, and cost resolution
//!
//! This library provides:
//! - Equipment entities: items, weapon profiles, accessories, upgrades,
//!   and assignment records
//! - Modifier: the closed stat/trait/skill-access modifier family
//! - Cost resolution: override -> price book -> base cost pipelines
//! - Cost-expression evaluation for formula-priced accessories
//! - AssignmentView: one read contract over persisted, default, and
//!   hypothetical assignments
//!
//! All operations are pure over already-loaded snapshots; nothing here
//! touches storage or mutates its inputs.

pub mod cost;
pub mod equipment;
pub mod expr;
pub mod loadout;
pub mod modifier;
pub mod types;

// Core API - what most users need
pub use cost::{
    accessory_cost, assignment_total_cost, equipment_cost, profile_cost, upgrade_cost, PriceBook,
};
pub use equipment::{
    EquipmentAssignment, EquipmentItem, EquipmentUpgrade, ValidationError, WeaponAccessory,
    WeaponProfile,
};
pub use loadout::{AssignmentSource, AssignmentView, DefaultAssignment};
pub use modifier::{
    active_modifiers, Modifier, SkillAccessMode, SkillAccessModifier, StatModifier,
    StatModifierMode, TraitModifier, TraitModifierMode,
};
pub use types::{EquipmentCategory, FighterCategory, Rarity};

// Expression evaluation (for callers that validate formulas up front)
pub use expr::{evaluate, EvalError};
