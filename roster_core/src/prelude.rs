//! Prelude module for convenient imports
//!
//! ```rust
//! use roster_core::prelude::*;
//! ```

// Core types
pub use crate::fighter::{standard_statline, Fighter, FighterType, StatEntry};

// Statline resolution
pub use crate::statline::{resolve_statline, resolve_traits, ResolvedStat};

// Skill access
pub use crate::skills::{resolve_skill_access, SkillAccess};

// Metadata
pub use crate::metadata::{ModContext, StatMetadata, StatMetadataRegistry};

// Re-exports from gear_core
pub use gear_core::{EquipmentAssignment, FighterCategory, Modifier, PriceBook};
