//! combat_core - Deterministic MOBA combat math
//!
//! This library provides:
//! - Stat aggregation: base attribute curve + level + item loadout into ComputedStats
//! - Ability scaling parsing: two raw descriptor shapes into one ParsedAbility
//! - Damage resolution: raw or formula damage into mitigated damage with a breakdown
//!
//! Every operation is a pure function over caller-supplied tables; nothing is
//! cached or fetched here.

pub mod ability;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use ability::{parse, parse_json, parse_value, AbilityDescriptor, ParsedAbility, ScalingTerm};
pub use combat::{DamageReport, SingleDamageResult};
pub use config::{ConfigError, GameConstants};
pub use damage::{resolve, resolve_ability, resolve_auto_attack};
pub use defense::defense_mitigation;
pub use source::{BaseAttributeCurve, ItemStatTable, ItemStats, SupplementaryStats};
pub use stat_block::{compute_stats, compute_stats_with, stat_at_level, ComputedStats};
pub use types::{DamageType, ScalingStat};
