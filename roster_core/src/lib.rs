//! roster_core - Fighter statline and skill access resolution
//!
//! This library provides:
//! - FighterType / Fighter: templates and roster entries
//! - StatMetadataRegistry + ModContext: how each stat behaves under
//!   modifiers, with a per-computation lookup cache
//! - Statline resolution: ordered modifier application over display tokens
//! - Skill access resolution: primary/secondary category sets
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use roster_core::prelude::*;
//! use gear_core::{EquipmentAssignment, PriceBook};
//!
//! let registry = StatMetadataRegistry::standard();
//! let mut fighter = Fighter::new("f-1", "Silva", fighter_type);
//! fighter.assignments.push(EquipmentAssignment::new("juve", knife));
//!
//! let statline = fighter.statline(&registry);
//! let cost = fighter.total_cost(&PriceBook::new());
//! ```

pub mod fighter;
pub mod metadata;
pub mod prelude;
pub mod skills;
pub mod statline;

// Core API - what most users need
pub use fighter::{standard_statline, Fighter, FighterType, StatEntry, STANDARD_STAT_FIELDS};
pub use metadata::{ConfigError, ModContext, StatMetadata, StatMetadataRegistry};
pub use skills::{resolve_skill_access, SkillAccess};
pub use statline::{resolve_statline, resolve_traits, ResolvedStat};

// Re-export commonly needed gear_core types
pub use gear_core::{EquipmentAssignment, FighterCategory, Modifier, PriceBook};
