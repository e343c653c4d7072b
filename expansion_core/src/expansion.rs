use crate::config::{ExpansionFileConfig, ItemConfig, ProfileConfig, RuleConfig};
use crate::rule::{ExpansionRule, RuleInputs};
use crate::RuleError;
use gear_core::equipment::{EquipmentItem, WeaponProfile};
use serde::{Deserialize, Serialize};

/// A named, rule-gated bundle of bonus equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expansion {
    pub id: String,
    pub name: String,
    /// AND-combined gate predicates; empty means "always applies"
    pub rules: Vec<ExpansionRule>,
    pub items: Vec<ExpansionItem>,
}

/// One equipment grant inside an expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionItem {
    pub equipment: EquipmentItem,
    /// Expansion-specific price, beating the item's base cost
    #[serde(default)]
    pub cost_override: Option<i32>,
    #[serde(default)]
    pub profile: Option<WeaponProfile>,
}

impl ExpansionItem {
    /// The price this expansion offers the item at
    pub fn effective_cost(&self) -> i32 {
        self.cost_override.unwrap_or(self.equipment.base_cost)
    }
}

impl Expansion {
    /// True iff every rule matches (vacuously true with no rules)
    pub fn applies(&self, inputs: &RuleInputs<'_>) -> bool {
        self.rules.iter().all(|rule| rule.matches(inputs))
    }

    /// Build an expansion from parsed TOML config
    pub fn from_config(config: ExpansionFileConfig) -> Result<Self, RuleError> {
        let rules = config
            .rules
            .into_iter()
            .map(rule_from_config)
            .collect::<Result<_, _>>()?;

        let items = config.items.into_iter().map(item_from_config).collect();

        Ok(Expansion {
            id: config.expansion.id,
            name: config.expansion.name,
            rules,
            items,
        })
    }
}

fn rule_from_config(config: RuleConfig) -> Result<ExpansionRule, RuleError> {
    match config.rule_type.as_str() {
        "attribute" => {
            let attribute = config.attribute.ok_or_else(|| RuleError::MissingField {
                rule_type: "attribute".to_string(),
                field: "attribute".to_string(),
            })?;
            Ok(ExpansionRule::ByAttribute {
                attribute,
                values: config.values,
            })
        }
        "house" => {
            let house = config.house.ok_or_else(|| RuleError::MissingField {
                rule_type: "house".to_string(),
                field: "house".to_string(),
            })?;
            Ok(ExpansionRule::ByHouse { house })
        }
        "fighter_category" => Ok(ExpansionRule::ByFighterCategory {
            categories: config.categories,
        }),
        other => Err(RuleError::InvalidRuleType(other.to_string())),
    }
}

fn item_from_config(config: ItemConfig) -> ExpansionItem {
    let profile = config.profile.map(|p| profile_from_config(p, &config.id));
    ExpansionItem {
        equipment: EquipmentItem {
            id: config.id,
            name: config.name,
            category: config.category,
            rarity: config.rarity,
            base_cost: config.base_cost,
            is_weapon: config.is_weapon,
            modifiers: Vec::new(),
        },
        cost_override: config.cost_override,
        profile,
    }
}

fn profile_from_config(config: ProfileConfig, equipment_id: &str) -> WeaponProfile {
    WeaponProfile {
        id: config.id,
        equipment_id: equipment_id.to_string(),
        name: config.name,
        base_cost: config.base_cost,
        range_short: config.range_short,
        range_long: config.range_long,
        accuracy_short: config.accuracy_short,
        accuracy_long: config.accuracy_long,
        strength: config.strength,
        armour_piercing: config.armour_piercing,
        damage: config.damage,
        ammo: config.ammo,
        traits: config.traits,
    }
}
