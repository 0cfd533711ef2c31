//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Inputs
pub use crate::source::{BaseAttributeCurve, ItemStatTable, ItemStats, SupplementaryStats};

// Stat aggregation
pub use crate::stat_block::{compute_stats, compute_stats_with, stat_at_level, ComputedStats};

// Ability parsing
pub use crate::ability::{
    parse, parse_json, parse_value, AbilityDescriptor, ParsedAbility, ScalingTerm,
};

// Damage resolution
pub use crate::combat::{DamageReport, SingleDamageResult};
pub use crate::damage::{
    resolve, resolve_ability, resolve_ability_with, resolve_auto_attack, resolve_auto_attack_with,
    resolve_with,
};
pub use crate::defense::{defense_mitigation, effective_armor, effective_magic_resist};

// Config
pub use crate::config::{
    default_champion_curves, default_constants, default_item_table, GameConstants,
};

// Core types
pub use crate::types::{DamageType, ScalingStat};
