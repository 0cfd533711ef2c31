//! Damage resolution - raw damage and ability formulas into mitigated results

mod calculation;
mod resolution;

pub use calculation::{
    ability_raw_damage, crit_multiplier, resolve_ability, resolve_ability_with,
    resolve_auto_attack, resolve_auto_attack_with, scaling_stat_value,
};
pub use resolution::{mitigation_for, resolve, resolve_with, Mitigation};
