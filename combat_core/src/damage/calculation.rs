//! Damage calculation - auto-attacks and ability instances into results

use super::resolution::mitigation_for;
use crate::ability::ParsedAbility;
use crate::combat::SingleDamageResult;
use crate::config::GameConstants;
use crate::stat_block::ComputedStats;
use crate::types::{DamageType, ScalingStat};

/// Attacker stat value a scaling term reads, `None` for unrecognized tags
pub fn scaling_stat_value(stats: &ComputedStats, stat: ScalingStat) -> Option<f64> {
    match stat {
        ScalingStat::AbilityPower => Some(stats.ability_power),
        ScalingStat::AttackDamage => Some(stats.attack_damage),
        ScalingStat::BonusAttackDamage => Some(stats.bonus_attack_damage()),
        ScalingStat::BaseAttackDamage => Some(stats.base_attack_damage),
        ScalingStat::MaxHealth => Some(stats.hp),
        ScalingStat::Armor => Some(stats.armor),
        ScalingStat::MagicResist => Some(stats.magic_resist),
        ScalingStat::Lethality => Some(stats.lethality),
        ScalingStat::Unrecognized => None,
    }
}

/// Critical strike multiplier: base plus the attacker's crit amplifier bonus
pub fn crit_multiplier(attacker: &ComputedStats, constants: &GameConstants) -> f64 {
    constants.crit.base_multiplier + attacker.crit_damage_bonus
}

/// Format a ratio as a percentage, keeping one decimal only when needed
fn percent_label(ratio: f64) -> String {
    let text = format!("{:.1}", ratio * 100.0);
    let text = text.strip_suffix(".0").unwrap_or(&text).to_string();
    format!("{}%", text)
}

/// Resolve a basic attack with the default constants
pub fn resolve_auto_attack(
    attacker: &ComputedStats,
    attacker_level: u32,
    target: &ComputedStats,
) -> SingleDamageResult {
    resolve_auto_attack_with(attacker, attacker_level, target, &GameConstants::default())
}

/// Resolve a basic attack
///
/// The mitigated figure is always the non-crit hit; the crit hit only
/// appears in the breakdown when the attacker has crit chance.
pub fn resolve_auto_attack_with(
    attacker: &ComputedStats,
    attacker_level: u32,
    target: &ComputedStats,
    constants: &GameConstants,
) -> SingleDamageResult {
    let raw = attacker.attack_damage;
    let mitigation =
        mitigation_for(DamageType::Physical, attacker, attacker_level, target, constants);
    let mitigated = mitigation.apply(raw);

    let multiplier = crit_multiplier(attacker, constants);
    let crit_raw = raw * multiplier;
    let crit_mitigated = mitigation.apply(crit_raw);

    let mut breakdown = format!(
        "{:.1} AD vs {} = {:.0}",
        raw,
        mitigation.describe(),
        mitigated
    );
    if attacker.crit_chance > 0.0 {
        let bonus = if attacker.crit_damage_bonus > 0.0 {
            format!(" incl. +{}", percent_label(attacker.crit_damage_bonus))
        } else {
            String::new()
        };
        breakdown.push_str(&format!(
            "; crit x{}{} = {:.0} ({:.1} raw, {} chance)",
            percent_label(multiplier),
            bonus,
            crit_mitigated,
            crit_raw,
            percent_label(attacker.crit_chance)
        ));
    }

    SingleDamageResult {
        label: "Auto Attack".to_string(),
        raw_damage: raw,
        mitigated_damage: mitigated,
        damage_type: DamageType::Physical,
        breakdown,
    }
}

/// Raw damage of an ability at `rank`: base plus every recognized scaling
pub fn ability_raw_damage(ability: &ParsedAbility, rank: usize, attacker: &ComputedStats) -> f64 {
    let scaling: f64 = ability
        .scalings
        .iter()
        .filter_map(|term| {
            scaling_stat_value(attacker, term.stat).map(|value| value * term.ratio_at(rank))
        })
        .sum();
    ability.base_damage_at(rank) + scaling
}

/// Resolve an ability instance with the default constants
pub fn resolve_ability(
    ability: &ParsedAbility,
    rank: usize,
    attacker: &ComputedStats,
    attacker_level: u32,
    target: &ComputedStats,
) -> SingleDamageResult {
    resolve_ability_with(
        ability,
        rank,
        attacker,
        attacker_level,
        target,
        &GameConstants::default(),
    )
}

/// Resolve an ability instance at `rank` (1-based)
///
/// An invalid ability resolves to zero damage with a breakdown saying so.
pub fn resolve_ability_with(
    ability: &ParsedAbility,
    rank: usize,
    attacker: &ComputedStats,
    attacker_level: u32,
    target: &ComputedStats,
    constants: &GameConstants,
) -> SingleDamageResult {
    if !ability.valid {
        return SingleDamageResult {
            label: ability.label().to_string(),
            raw_damage: 0.0,
            mitigated_damage: 0.0,
            damage_type: ability.damage_type,
            breakdown: "no damage data available".to_string(),
        };
    }

    let base = ability.base_damage_at(rank);
    let mut parts = vec![format!("{:.1} base", base)];
    let mut raw = base;

    for term in &ability.scalings {
        let Some(value) = scaling_stat_value(attacker, term.stat) else {
            continue;
        };
        let ratio = term.ratio_at(rank);
        let contribution = value * ratio;
        raw += contribution;
        parts.push(format!(
            "{:.1} ({} {} of {:.1})",
            contribution,
            percent_label(ratio),
            term.stat,
            value
        ));
    }

    let mitigation =
        mitigation_for(ability.damage_type, attacker, attacker_level, target, constants);
    let mitigated = mitigation.apply(raw);

    let breakdown = format!(
        "rank {}: {} = {:.1} {} vs {} = {:.0}",
        rank.max(1),
        parts.join(" + "),
        raw,
        ability.damage_type,
        mitigation.describe(),
        mitigated
    );

    SingleDamageResult {
        label: ability.label().to_string(),
        raw_damage: raw,
        mitigated_damage: mitigated,
        damage_type: ability.damage_type,
        breakdown,
    }
}
