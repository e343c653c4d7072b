//! Skill-tree category access resolution
//!
//! A fighter type declares primary and secondary skill category sets;
//! equipment can widen, narrow, or disable access while carried. `Disable`
//! is sticky within one resolution: once a category is disabled, a later
//! `add_primary`/`add_secondary` for the same category is ignored.

use crate::fighter::FighterType;
use gear_core::modifier::{Modifier, SkillAccessMode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fighter's resolved skill category access
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAccess {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

impl SkillAccess {
    pub fn has_primary(&self, category: &str) -> bool {
        self.primary.iter().any(|c| c == category)
    }

    pub fn has_secondary(&self, category: &str) -> bool {
        self.secondary.iter().any(|c| c == category)
    }
}

fn add_unique(set: &mut Vec<String>, category: &str) {
    if !set.iter().any(|c| c == category) {
        set.push(category.to_string());
    }
}

/// Resolve skill access from the fighter type's declared sets and the
/// active modifiers, in gather order
pub fn resolve_skill_access(fighter_type: &FighterType, modifiers: &[&Modifier]) -> SkillAccess {
    let mut access = SkillAccess {
        primary: fighter_type.primary_skills.clone(),
        secondary: fighter_type.secondary_skills.clone(),
    };
    let mut disabled: HashSet<&str> = HashSet::new();

    for modifier in modifiers {
        let Modifier::SkillAccess(skill_mod) = modifier else {
            continue;
        };
        let category = skill_mod.skill_category.as_str();

        match skill_mod.mode {
            SkillAccessMode::AddPrimary => {
                if !disabled.contains(category) {
                    add_unique(&mut access.primary, category);
                }
            }
            SkillAccessMode::AddSecondary => {
                if !disabled.contains(category) {
                    add_unique(&mut access.secondary, category);
                }
            }
            SkillAccessMode::RemovePrimary => {
                access.primary.retain(|c| c != category);
            }
            SkillAccessMode::RemoveSecondary => {
                access.secondary.retain(|c| c != category);
            }
            SkillAccessMode::Disable => {
                access.primary.retain(|c| c != category);
                access.secondary.retain(|c| c != category);
                disabled.insert(category);
            }
        }
    }

    access
}
