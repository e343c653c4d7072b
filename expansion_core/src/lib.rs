//! expansion_core - Rule-gated bonus equipment for lists and fighters
//!
//! An expansion is a named bundle of equipment (optionally with price
//! overrides) gated behind predicate rules. All of an expansion's rules
//! must match (AND semantics); an expansion with no rules always applies.

pub mod config;
mod expansion;
mod registry;
mod rule;

pub use expansion::{Expansion, ExpansionItem};
pub use registry::{EquipmentOffer, ExpansionRegistry};
pub use rule::{AttributeValue, ExpansionRule, ListContext, RuleInputs};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading expansion configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error building an expansion from config
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid rule type: {0}")]
    InvalidRuleType(String),
    #[error("Rule '{rule_type}' is missing required field '{field}'")]
    MissingField {
        rule_type: String,
        field: String,
    },
}
