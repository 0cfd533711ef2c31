//! Defense system - Armor, Magic Resist and the shared mitigation law

mod armor;
mod magic_resist;

pub use armor::{effective_armor, effective_lethality, effective_lethality_with};
pub use magic_resist::effective_magic_resist;

/// Damage multiplier for an effective defense value
///
/// `100 / (100 + defense)`, or `1.0` when the defense is zero or negative.
pub fn defense_mitigation(effective_defense: f64) -> f64 {
    if effective_defense <= 0.0 {
        return 1.0;
    }
    100.0 / (100.0 + effective_defense)
}

/// Raw damage needed to remove `hp` through `effective_defense`
pub fn effective_health(hp: f64, effective_defense: f64) -> f64 {
    hp / defense_mitigation(effective_defense)
}
