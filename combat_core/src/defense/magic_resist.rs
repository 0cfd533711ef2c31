//! Magic resist - Magic mitigation after percent then flat penetration

/// Target magic resist after the attacker's penetration, never negative
pub fn effective_magic_resist(
    target_magic_resist: f64,
    magic_pen_percent: f64,
    magic_pen_flat: f64,
) -> f64 {
    let after_percent = target_magic_resist * (1.0 - magic_pen_percent);
    (after_percent - magic_pen_flat).max(0.0)
}
