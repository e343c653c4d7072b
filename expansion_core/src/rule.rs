//! Expansion rule predicates
//!
//! Rules match against the list being built (house, attribute-value
//! assignments) and optionally the fighter under consideration. A rule
//! family is a closed variant with one exhaustive `matches` dispatch.

use gear_core::types::FighterCategory;
use serde::{Deserialize, Serialize};

/// One active attribute-value assignment on a list (e.g. Affiliation = Malstrain)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub attribute: String,
    pub value: String,
}

/// The list half of the rule-match context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListContext {
    pub house: String,
    #[serde(default)]
    pub attributes: Vec<AttributeValue>,
}

impl ListContext {
    pub fn new(house: impl Into<String>) -> Self {
        ListContext {
            house: house.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(AttributeValue {
            attribute: attribute.into(),
            value: value.into(),
        });
        self
    }
}

/// The full rule-match context: a list, and optionally a fighter
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs<'a> {
    pub list: &'a ListContext,
    pub fighter_category: Option<FighterCategory>,
}

impl<'a> RuleInputs<'a> {
    pub fn for_list(list: &'a ListContext) -> Self {
        RuleInputs {
            list,
            fighter_category: None,
        }
    }

    pub fn for_fighter(list: &'a ListContext, category: FighterCategory) -> Self {
        RuleInputs {
            list,
            fighter_category: Some(category),
        }
    }
}

/// A single expansion gate predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpansionRule {
    /// The list has an assignment of this attribute; an empty value set
    /// means any assigned value matches, but absence never does
    ByAttribute {
        attribute: String,
        #[serde(default)]
        values: Vec<String>,
    },
    /// The list belongs to this house
    ByHouse { house: String },
    /// A fighter is present and its category is in the set
    ByFighterCategory { categories: Vec<FighterCategory> },
}

impl ExpansionRule {
    /// Evaluate this rule against the match context
    pub fn matches(&self, inputs: &RuleInputs<'_>) -> bool {
        match self {
            ExpansionRule::ByAttribute { attribute, values } => inputs
                .list
                .attributes
                .iter()
                .any(|av| av.attribute == *attribute && (values.is_empty() || values.contains(&av.value))),
            ExpansionRule::ByHouse { house } => inputs.list.house == *house,
            ExpansionRule::ByFighterCategory { categories } => inputs
                .fighter_category
                .is_some_and(|category| categories.contains(&category)),
        }
    }
}
