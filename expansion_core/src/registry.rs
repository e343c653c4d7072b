use crate::config::ExpansionFileConfig;
use crate::expansion::Expansion;
use crate::rule::RuleInputs;
use crate::ConfigError;
use gear_core::equipment::{EquipmentItem, WeaponProfile};
use std::collections::HashMap;
use std::path::Path;

/// One de-duplicated equipment grant with its resolved offer price
#[derive(Debug, Clone)]
pub struct EquipmentOffer {
    pub equipment: EquipmentItem,
    pub cost: i32,
    pub profile: Option<WeaponProfile>,
    /// The expansion the winning price came from
    pub expansion_id: String,
}

/// Registry of all expansions, loaded from TOML files
///
/// Expansion order is stable load/registration order; queries preserve it.
#[derive(Debug, Default)]
pub struct ExpansionRegistry {
    expansions: Vec<Expansion>,
}

impl ExpansionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all expansions from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.load_dir(dir)?;
        Ok(registry)
    }

    /// Load expansions from a directory recursively
    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single expansion file
    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: ExpansionFileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?;

        let expansion = Expansion::from_config(config).map_err(|e| ConfigError::Validation {
            message: e.to_string(),
            path: path.to_path_buf(),
        })?;

        self.register(expansion);
        Ok(())
    }

    /// Register an expansion built in memory
    pub fn register(&mut self, expansion: Expansion) {
        self.expansions.push(expansion);
    }

    /// Get an expansion by ID
    pub fn get(&self, id: &str) -> Option<&Expansion> {
        self.expansions.iter().find(|e| e.id == id)
    }

    /// Number of registered expansions
    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }

    /// Every expansion whose rules all match the inputs, in stable order
    pub fn applicable(&self, inputs: &RuleInputs<'_>) -> Vec<&Expansion> {
        self.expansions
            .iter()
            .filter(|e| e.applies(inputs))
            .collect()
    }

    /// The union of equipment granted by all applicable expansions
    ///
    /// When two applicable expansions grant the same equipment item at
    /// different prices, the lowest effective cost wins (deterministic,
    /// always in the player's favour). First-seen order is preserved.
    pub fn equipment(&self, inputs: &RuleInputs<'_>) -> Vec<EquipmentOffer> {
        let mut offers: Vec<EquipmentOffer> = Vec::new();
        let mut by_equipment_id: HashMap<String, usize> = HashMap::new();

        for expansion in self.applicable(inputs) {
            for item in &expansion.items {
                let cost = item.effective_cost();
                match by_equipment_id.get(&item.equipment.id) {
                    Some(&index) => {
                        if cost < offers[index].cost {
                            offers[index].cost = cost;
                            offers[index].expansion_id = expansion.id.clone();
                        }
                    }
                    None => {
                        by_equipment_id.insert(item.equipment.id.clone(), offers.len());
                        offers.push(EquipmentOffer {
                            equipment: item.equipment.clone(),
                            cost,
                            profile: item.profile.clone(),
                            expansion_id: expansion.id.clone(),
                        });
                    }
                }
            }
        }

        offers
    }
}
