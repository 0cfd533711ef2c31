//! Per-level growth law and rounding checkpoints

use crate::types::clamp_level;

/// Growth multiplier applied to a per-level stat at `level`
///
/// `(level - 1) * (0.7025 + 0.0175 * (level - 1))`. Growth accelerates
/// slightly with level; at level 18 it is exactly 17. Levels outside
/// 1..=18 are clamped.
pub fn level_growth_factor(level: u32) -> f64 {
    let steps = (clamp_level(level) - 1) as f64;
    steps * (0.7025 + 0.0175 * steps)
}

/// Value of a stat at `level` given its base and per-level growth
pub fn stat_at_level(base: f64, growth: f64, level: u32) -> f64 {
    base + growth * level_growth_factor(level)
}

/// Attack speed at `level` before any bonus attack speed
///
/// `growth_percent` is a percentage of the base value (2.5 = 2.5%).
pub fn attack_speed_at_level(base: f64, growth_percent: f64, level: u32) -> f64 {
    base * (1.0 + growth_percent / 100.0 * level_growth_factor(level))
}

/// Checkpoint for hp and mp
pub fn round_whole(value: f64) -> f64 {
    value.round()
}

/// Checkpoint for armor, magic resist and attack damage
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Checkpoint for attack speed
pub fn round_thousandth(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
