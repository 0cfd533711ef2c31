//! Core types shared by the aggregator, parser and resolver

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest champion level
pub const MIN_LEVEL: u32 = 1;

/// Highest champion level
pub const MAX_LEVEL: u32 = 18;

/// Clamp a level into the playable range
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// How a damage instance is mitigated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// Mitigated by armor
    Physical,
    /// Mitigated by magic resist
    Magic,
    /// Never mitigated
    True,
}

impl DamageType {
    /// Parse a damage type name, tolerating the common spellings found in game data
    pub fn from_name(name: &str) -> Option<DamageType> {
        match name.trim().to_ascii_lowercase().as_str() {
            "physical" | "physicaldamage" | "physical_damage" | "ad" => Some(DamageType::Physical),
            "magic" | "magical" | "magicdamage" | "magic_damage" | "ap" => Some(DamageType::Magic),
            "true" | "truedamage" | "true_damage" | "pure" => Some(DamageType::True),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magic => "magic",
            DamageType::True => "true",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Attacker stat an ability ratio scales with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingStat {
    AbilityPower,
    AttackDamage,
    BonusAttackDamage,
    BaseAttackDamage,
    MaxHealth,
    Armor,
    MagicResist,
    Lethality,
    /// A tag this version does not know how to resolve; contributes nothing
    #[serde(other)]
    Unrecognized,
}

impl ScalingStat {
    /// Short label used in damage breakdowns
    pub fn label(&self) -> &'static str {
        match self {
            ScalingStat::AbilityPower => "AP",
            ScalingStat::AttackDamage => "AD",
            ScalingStat::BonusAttackDamage => "bonus AD",
            ScalingStat::BaseAttackDamage => "base AD",
            ScalingStat::MaxHealth => "max HP",
            ScalingStat::Armor => "armor",
            ScalingStat::MagicResist => "MR",
            ScalingStat::Lethality => "lethality",
            ScalingStat::Unrecognized => "unknown",
        }
    }
}

impl fmt::Display for ScalingStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_level() {
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(9), 9);
        assert_eq!(clamp_level(30), 18);
    }

    #[test]
    fn test_damage_type_from_name() {
        assert_eq!(DamageType::from_name("Physical"), Some(DamageType::Physical));
        assert_eq!(DamageType::from_name(" magic "), Some(DamageType::Magic));
        assert_eq!(DamageType::from_name("TRUE_DAMAGE"), Some(DamageType::True));
        assert_eq!(DamageType::from_name("holy"), None);
    }

    #[test]
    fn test_unknown_scaling_stat_deserializes() {
        let stat: ScalingStat = serde_json::from_str("\"attack_speed\"").unwrap();
        assert_eq!(stat, ScalingStat::Unrecognized);

        let stat: ScalingStat = serde_json::from_str("\"bonus_attack_damage\"").unwrap();
        assert_eq!(stat, ScalingStat::BonusAttackDamage);
    }
}
