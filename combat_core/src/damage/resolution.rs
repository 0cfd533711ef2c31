//! Mitigation dispatch - raw damage against a target's defenses

use crate::config::GameConstants;
use crate::defense::{
    defense_mitigation, effective_armor, effective_lethality_with, effective_magic_resist,
};
use crate::stat_block::ComputedStats;
use crate::types::DamageType;

/// How a damage type was mitigated against one target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mitigation {
    pub damage_type: DamageType,
    /// Target defense before penetration (0 for true damage)
    pub target_defense: f64,
    /// Defense after penetration (0 for true damage)
    pub effective_defense: f64,
    /// Share of raw damage that gets through
    pub multiplier: f64,
}

impl Mitigation {
    /// Rounded damage after mitigation
    pub fn apply(&self, raw_damage: f64) -> f64 {
        (raw_damage * self.multiplier).round()
    }

    /// Short description for breakdown text
    pub fn describe(&self) -> String {
        match self.damage_type {
            DamageType::True => "true damage, unmitigated".to_string(),
            DamageType::Physical | DamageType::Magic => {
                let defense = if self.damage_type == DamageType::Physical {
                    "armor"
                } else {
                    "MR"
                };
                format!(
                    "{:.1} {} (effective {:.1}, {:.0}% taken)",
                    self.target_defense,
                    defense,
                    self.effective_defense,
                    self.multiplier * 100.0
                )
            }
        }
    }
}

/// Work out the mitigation an attacker faces against a target
pub fn mitigation_for(
    damage_type: DamageType,
    attacker: &ComputedStats,
    attacker_level: u32,
    target: &ComputedStats,
    constants: &GameConstants,
) -> Mitigation {
    match damage_type {
        DamageType::Physical => {
            let flat_pen =
                effective_lethality_with(attacker.lethality, attacker_level, &constants.lethality);
            let effective = effective_armor(target.armor, attacker.armor_pen_percent, flat_pen);
            Mitigation {
                damage_type,
                target_defense: target.armor,
                effective_defense: effective,
                multiplier: defense_mitigation(effective),
            }
        }
        DamageType::Magic => {
            let effective = effective_magic_resist(
                target.magic_resist,
                attacker.magic_pen_percent,
                attacker.magic_pen_flat,
            );
            Mitigation {
                damage_type,
                target_defense: target.magic_resist,
                effective_defense: effective,
                multiplier: defense_mitigation(effective),
            }
        }
        DamageType::True => Mitigation {
            damage_type,
            target_defense: 0.0,
            effective_defense: 0.0,
            multiplier: 1.0,
        },
    }
}

/// Mitigated damage of `raw_damage` from attacker to target, rounded
pub fn resolve(
    raw_damage: f64,
    damage_type: DamageType,
    attacker: &ComputedStats,
    attacker_level: u32,
    target: &ComputedStats,
) -> f64 {
    resolve_with(
        raw_damage,
        damage_type,
        attacker,
        attacker_level,
        target,
        &GameConstants::default(),
    )
}

/// Same as [`resolve`] with explicit constants
pub fn resolve_with(
    raw_damage: f64,
    damage_type: DamageType,
    attacker: &ComputedStats,
    attacker_level: u32,
    target: &ComputedStats,
    constants: &GameConstants,
) -> f64 {
    let mitigation = mitigation_for(damage_type, attacker, attacker_level, target, constants);
    let mitigated = mitigation.apply(raw_damage);
    tracing::trace!(
        raw_damage,
        %damage_type,
        effective_defense = mitigation.effective_defense,
        multiplier = mitigation.multiplier,
        mitigated,
        "resolved damage"
    );
    mitigated
}
