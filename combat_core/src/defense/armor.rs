//! Armor - Physical mitigation after percent then flat penetration

use crate::config::LethalityConstants;
use crate::types::{clamp_level, MAX_LEVEL};

/// Flat armor penetration granted by lethality at the attacker's level
///
/// `lethality * (0.6 + 0.4 * level / 18)`
pub fn effective_lethality(lethality: f64, attacker_level: u32) -> f64 {
    effective_lethality_with(lethality, attacker_level, &LethalityConstants::default())
}

/// Same as [`effective_lethality`] with explicit constants
pub fn effective_lethality_with(
    lethality: f64,
    attacker_level: u32,
    constants: &LethalityConstants,
) -> f64 {
    let level = clamp_level(attacker_level) as f64;
    lethality * (constants.min_effectiveness + constants.level_scaling * level / MAX_LEVEL as f64)
}

/// Target armor after the attacker's penetration, never negative
///
/// Percent penetration resolves first, flat penetration is subtracted from
/// what remains.
pub fn effective_armor(target_armor: f64, armor_pen_percent: f64, flat_pen: f64) -> f64 {
    let after_percent = target_armor * (1.0 - armor_pen_percent);
    (after_percent - flat_pen).max(0.0)
}
