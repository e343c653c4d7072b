//! Stat metadata registry and per-computation lookup cache
//!
//! Metadata says how a stat behaves under modifiers: whether lower is
//! better (inverted), whether it is a roll target (trailing `+`), whether
//! it is measured in inches (trailing `"`). The registry covers the 12
//! standard fighter stats out of the box; custom statlines (vehicles,
//! exotic beasts) overlay their fields from TOML.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Error loading stat metadata configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path}': {error}")]
    Io {
        error: std::io::Error,
        path: String,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: String,
    },
}

/// How one stat field behaves under modifiers
///
/// Only `is_inverted` drives resolution. `is_target` and `is_inches`
/// classify the token shape for display callers (sheet rendering, input
/// validation); the resolver preserves suffixes from the token itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatMetadata {
    pub field: String,
    /// Short display label ("WS", "Ld", ...)
    pub label: String,
    /// Lower numeric value is better for the fighter
    #[serde(default)]
    pub is_inverted: bool,
    /// Value is a roll target with a trailing `+`
    #[serde(default)]
    pub is_target: bool,
    /// Value is a distance with a trailing `"`
    #[serde(default)]
    pub is_inches: bool,
}

impl StatMetadata {
    fn new(field: &str, label: &str, is_inverted: bool, is_target: bool, is_inches: bool) -> Self {
        StatMetadata {
            field: field.to_string(),
            label: label.to_string(),
            is_inverted,
            is_target,
            is_inches,
        }
    }
}

/// TOML container for metadata overlays
#[derive(Debug, Deserialize)]
struct MetadataFileConfig {
    #[serde(default)]
    stats: Vec<StatMetadata>,
}

/// Registry of stat metadata keyed by field name
#[derive(Debug, Clone, Default)]
pub struct StatMetadataRegistry {
    stats: HashMap<String, StatMetadata>,
}

impl StatMetadataRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the 12 standard fighter stats
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for meta in [
            StatMetadata::new("movement", "M", false, false, true),
            StatMetadata::new("weapon_skill", "WS", true, true, false),
            StatMetadata::new("ballistic_skill", "BS", true, true, false),
            StatMetadata::new("strength", "S", false, false, false),
            StatMetadata::new("toughness", "T", false, false, false),
            StatMetadata::new("wounds", "W", false, false, false),
            StatMetadata::new("initiative", "I", true, true, false),
            StatMetadata::new("attacks", "A", false, false, false),
            StatMetadata::new("leadership", "Ld", true, true, false),
            StatMetadata::new("cool", "Cl", true, true, false),
            StatMetadata::new("willpower", "Wil", true, true, false),
            StatMetadata::new("intelligence", "Int", true, true, false),
        ] {
            registry.register(meta);
        }
        registry
    }

    /// Register (or replace) metadata for one field
    pub fn register(&mut self, meta: StatMetadata) {
        self.stats.insert(meta.field.clone(), meta);
    }

    /// Get metadata by field name
    pub fn get(&self, field: &str) -> Option<&StatMetadata> {
        self.stats.get(field)
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Load a registry from TOML, overlaying entries on the standard set
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: path.display().to_string(),
        })?;
        let config: MetadataFileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.display().to_string(),
            })?;

        let mut registry = Self::standard();
        for meta in config.stats {
            registry.register(meta);
        }
        Ok(registry)
    }
}

/// Per-computation memo over a metadata registry
///
/// Statline resolution looks up each field once and reuses the answer for
/// every modifier touching that field; misses are cached too. One context
/// lives for one top-level computation and is discarded afterward.
#[derive(Debug)]
pub struct ModContext<'a> {
    registry: &'a StatMetadataRegistry,
    cache: HashMap<String, Option<StatMetadata>>,
}

impl<'a> ModContext<'a> {
    pub fn new(registry: &'a StatMetadataRegistry) -> Self {
        ModContext {
            registry,
            cache: HashMap::new(),
        }
    }

    /// Cached metadata lookup
    pub fn get(&mut self, field: &str) -> Option<&StatMetadata> {
        if !self.cache.contains_key(field) {
            let meta = self.registry.get(field).cloned();
            self.cache.insert(field.to_string(), meta);
        }
        self.cache.get(field).and_then(|m| m.as_ref())
    }

    /// Fields resolved so far (hits and misses)
    pub fn cached_fields(&self) -> usize {
        self.cache.len()
    }
}
