//! Descriptor parsing - both raw shapes into one ParsedAbility
//!
//! Parsing is a pure function of the descriptor. Unrecognized stat tokens
//! are dropped from the term list; only a descriptor that matches neither
//! shape produces an invalid result.

use super::descriptor::{AbilityDescriptor, FormulaDescriptor, SpellDescriptor};
use super::{ParsedAbility, ScalingTerm};
use crate::types::{DamageType, ScalingStat};
use serde::Deserialize;

/// Parse a typed descriptor
pub fn parse(descriptor: &AbilityDescriptor) -> ParsedAbility {
    match descriptor {
        AbilityDescriptor::Spell(spell) => parse_spell(spell),
        AbilityDescriptor::Formula(formula) => parse_formula(formula),
        AbilityDescriptor::Unknown => {
            tracing::debug!("descriptor has an unknown format");
            ParsedAbility::invalid("")
        }
    }
}

/// Parse an untyped JSON descriptor
///
/// Anything that does not deserialize into a known shape yields an invalid
/// ability carrying whatever `id` the value had.
pub fn parse_value(value: &serde_json::Value) -> ParsedAbility {
    match AbilityDescriptor::deserialize(value) {
        Ok(descriptor) => {
            let mut parsed = parse(&descriptor);
            if parsed.id.is_empty() {
                parsed.id = raw_id(value);
            }
            parsed
        }
        Err(err) => {
            tracing::debug!(error = %err, "descriptor matches no known shape");
            ParsedAbility::invalid(raw_id(value))
        }
    }
}

/// Parse a JSON descriptor string
pub fn parse_json(content: &str) -> ParsedAbility {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(value) => parse_value(&value),
        Err(err) => {
            tracing::debug!(error = %err, "descriptor is not valid JSON");
            ParsedAbility::invalid("")
        }
    }
}

fn raw_id(value: &serde_json::Value) -> String {
    value
        .get("id")
        .and_then(|id| id.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Map a spell var link name to a scaling stat
pub fn spell_link_stat(link: &str) -> Option<ScalingStat> {
    let normalized = link.trim().trim_start_matches('@').to_ascii_lowercase();
    match normalized.as_str() {
        "spelldamage" | "magicdamage" | "abilitypower" | "ap" => Some(ScalingStat::AbilityPower),
        "attackdamage" | "totalattackdamage" | "ad" => Some(ScalingStat::AttackDamage),
        "bonusattackdamage" | "bonusad" => Some(ScalingStat::BonusAttackDamage),
        "baseattackdamage" | "basead" => Some(ScalingStat::BaseAttackDamage),
        "health" | "maxhealth" => Some(ScalingStat::MaxHealth),
        "armor" => Some(ScalingStat::Armor),
        "spellblock" | "magicresist" | "mr" => Some(ScalingStat::MagicResist),
        "lethality" => Some(ScalingStat::Lethality),
        _ => None,
    }
}

/// Map a data-mined stat id and part to a scaling stat
///
/// | id | stat           |
/// |----|----------------|
/// | 0  | ability power  |
/// | 1  | armor          |
/// | 2  | attack damage (part: total, base, bonus) |
/// | 5  | magic resist   |
/// | 11 | max health     |
/// | 26 | lethality      |
pub fn formula_stat(stat: u32, part: Option<&str>) -> Option<ScalingStat> {
    let part = part.map(|p| p.trim().to_ascii_lowercase());
    let part = part.as_deref().unwrap_or("total");
    match (stat, part) {
        (0, "total") => Some(ScalingStat::AbilityPower),
        (1, "total") => Some(ScalingStat::Armor),
        (2, "total") => Some(ScalingStat::AttackDamage),
        (2, "base") => Some(ScalingStat::BaseAttackDamage),
        (2, "bonus") => Some(ScalingStat::BonusAttackDamage),
        (5, "total") => Some(ScalingStat::MagicResist),
        (11, "total") => Some(ScalingStat::MaxHealth),
        (26, "total") => Some(ScalingStat::Lethality),
        _ => None,
    }
}

/// Read a damage type name, accepting a `k` enum prefix (`kPhysical`)
fn damage_type_name(name: &str) -> Option<DamageType> {
    let trimmed = name.trim();
    let unprefixed = trimmed
        .strip_prefix('k')
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
        .unwrap_or(trimmed);
    DamageType::from_name(unprefixed)
}

/// Damage type from tooltip markup; the first tag in the text wins
fn tooltip_damage_type(tooltip: &str) -> Option<DamageType> {
    let lower = tooltip.to_ascii_lowercase();
    [
        ("<physicaldamage>", DamageType::Physical),
        ("<magicdamage>", DamageType::Magic),
        ("<truedamage>", DamageType::True),
    ]
    .into_iter()
    .filter_map(|(tag, damage_type)| lower.find(tag).map(|pos| (pos, damage_type)))
    .min_by_key(|(pos, _)| *pos)
    .map(|(_, damage_type)| damage_type)
}

fn truncate_ranks(values: &mut Vec<f64>, max_rank: Option<usize>) {
    if let Some(max) = max_rank {
        if max > 0 {
            values.truncate(max);
        }
    }
}

fn parse_spell(spell: &SpellDescriptor) -> ParsedAbility {
    let base = spell
        .effect
        .get(spell.base_effect)
        .and_then(|slot| slot.as_ref())
        .filter(|values| !values.is_empty());

    let Some(base) = base else {
        tracing::debug!(
            id = %spell.id,
            slot = spell.base_effect,
            "spell has no base damage effect"
        );
        return ParsedAbility::invalid(spell.id.clone());
    };

    let mut base_damage = base.clone();
    truncate_ranks(&mut base_damage, spell.max_rank);

    let damage_type = spell
        .damage_type
        .as_deref()
        .and_then(damage_type_name)
        .or_else(|| tooltip_damage_type(&spell.tooltip))
        .unwrap_or(DamageType::Magic);

    let mut scalings = Vec::new();
    for var in &spell.vars {
        match spell_link_stat(&var.link) {
            Some(stat) => {
                let mut ratios = var.coeff.clone().into_values();
                truncate_ranks(&mut ratios, spell.max_rank);
                scalings.push(ScalingTerm::per_rank(stat, ratios));
            }
            None => {
                tracing::debug!(
                    id = %spell.id,
                    link = %var.link,
                    "dropping unrecognized scaling link"
                );
            }
        }
    }

    ParsedAbility {
        id: spell.id.clone(),
        name: spell.name.clone(),
        damage_type,
        base_damage,
        scalings,
        valid: true,
    }
}

fn parse_formula(formula: &FormulaDescriptor) -> ParsedAbility {
    let base = formula
        .data_value(&formula.base_damage)
        .filter(|values| !values.is_empty());

    let Some(base) = base else {
        tracing::debug!(
            id = %formula.id,
            value = %formula.base_damage,
            "formula base damage value missing"
        );
        return ParsedAbility::invalid(formula.id.clone());
    };

    let mut base_damage = base.to_vec();
    truncate_ranks(&mut base_damage, formula.max_rank);

    let damage_type = formula
        .damage_type
        .as_deref()
        .and_then(damage_type_name)
        .unwrap_or(DamageType::Magic);

    let mut scalings = Vec::new();
    for calc in &formula.calculations {
        let Some(stat) = formula_stat(calc.stat, calc.part.as_deref()) else {
            tracing::debug!(
                id = %formula.id,
                stat = calc.stat,
                part = ?calc.part,
                "dropping unrecognized formula stat"
            );
            continue;
        };

        let ratios = match (&calc.coefficient, &calc.data_value) {
            (Some(coefficient), _) => Some(coefficient.clone().into_values()),
            (None, Some(name)) => formula.data_value(name).map(|values| values.to_vec()),
            (None, None) => None,
        };

        match ratios.filter(|values| !values.is_empty()) {
            Some(mut ratios) => {
                truncate_ranks(&mut ratios, formula.max_rank);
                scalings.push(ScalingTerm::per_rank(stat, ratios));
            }
            None => {
                tracing::debug!(id = %formula.id, stat = calc.stat, "formula term has no ratio");
            }
        }
    }

    ParsedAbility {
        id: formula.id.clone(),
        name: formula.name.clone(),
        damage_type,
        base_damage,
        scalings,
        valid: true,
    }
}
