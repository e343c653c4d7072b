use gear_core::types::{EquipmentCategory, FighterCategory, Rarity};
use serde::Deserialize;

/// TOML configuration for one expansion file
#[derive(Debug, Deserialize)]
pub struct ExpansionFileConfig {
    pub expansion: ExpansionConfig,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Configuration for the expansion itself
#[derive(Debug, Deserialize)]
pub struct ExpansionConfig {
    pub id: String,
    pub name: String,
}

/// Configuration for a single gate rule
#[derive(Debug, Deserialize)]
pub struct RuleConfig {
    #[serde(rename = "type")]
    pub rule_type: String,

    // Attribute-rule fields
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,

    // House-rule fields
    #[serde(default)]
    pub house: Option<String>,

    // Fighter-category-rule fields
    #[serde(default)]
    pub categories: Vec<FighterCategory>,
}

/// Configuration for one granted equipment item
#[derive(Debug, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    pub name: String,
    pub category: EquipmentCategory,
    #[serde(default)]
    pub rarity: Rarity,
    pub base_cost: i32,
    #[serde(default)]
    pub is_weapon: bool,
    /// Expansion-specific price, beating the item's base cost
    #[serde(default)]
    pub cost_override: Option<i32>,
    #[serde(default)]
    pub profile: Option<ProfileConfig>,
}

/// Configuration for an optional weapon profile on a granted item
#[derive(Debug, Deserialize)]
pub struct ProfileConfig {
    pub id: String,
    pub name: String,
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
