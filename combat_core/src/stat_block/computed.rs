//! ComputedStats - Resolved attribute snapshot for one champion instance

use serde::{Deserialize, Serialize};

/// Full resolved attribute set at one (level, loadout) pair
///
/// A plain value: recomputed on every query and never mutated by the
/// resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputedStats {
    // === Resources ===
    pub hp: f64,
    pub mp: f64,

    // === Defenses ===
    pub armor: f64,
    pub magic_resist: f64,

    // === Offense ===
    pub attack_damage: f64,
    /// Attack damage from the level curve alone
    pub base_attack_damage: f64,
    pub attack_speed: f64,
    pub ability_power: f64,
    /// Fraction, 0.0..=1.0
    pub crit_chance: f64,
    /// Added to the crit multiplier when a crit amplifier is equipped
    pub crit_damage_bonus: f64,

    // === Penetration ===
    pub lethality: f64,
    /// Fraction, 0.0..=1.0
    pub armor_pen_percent: f64,
    pub magic_pen_flat: f64,
    /// Fraction, 0.0..=1.0
    pub magic_pen_percent: f64,

    // === Utility ===
    pub ability_haste: f64,
    pub move_speed: f64,
}

impl ComputedStats {
    /// Attack damage gained from items, never negative
    pub fn bonus_attack_damage(&self) -> f64 {
        (self.attack_damage - self.base_attack_damage).max(0.0)
    }

    /// A bare target with only defensive stats set, handy for quick lookups
    pub fn with_defenses(hp: f64, armor: f64, magic_resist: f64) -> Self {
        ComputedStats {
            hp,
            armor,
            magic_resist,
            ..Default::default()
        }
    }
}
