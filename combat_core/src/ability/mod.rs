//! Ability scaling - raw descriptors normalized into per-rank formulas

mod descriptor;
mod parser;

pub use descriptor::{
    AbilityDescriptor, Coefficient, DataValue, FormulaCalculation, FormulaDescriptor,
    SpellDescriptor, SpellVar,
};
pub use parser::{formula_stat, parse, parse_json, parse_value, spell_link_stat};

use crate::types::{DamageType, ScalingStat};
use serde::{Deserialize, Serialize};

/// Value for a 1-based rank from a per-rank list
///
/// A single value applies to every rank, ranks past the end use the last
/// value, and rank 0 reads as rank 1. Empty lists read as 0.
pub fn value_at_rank(values: &[f64], rank: usize) -> f64 {
    match values.last() {
        None => 0.0,
        Some(last) => {
            let index = rank.max(1) - 1;
            values.get(index).copied().unwrap_or(*last)
        }
    }
}

/// "Gains `ratio` damage per point of `stat`", with the ratio kept per rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingTerm {
    pub stat: ScalingStat,
    pub ratios: Vec<f64>,
}

impl ScalingTerm {
    /// Same ratio at every rank
    pub fn new(stat: ScalingStat, ratio: f64) -> Self {
        ScalingTerm {
            stat,
            ratios: vec![ratio],
        }
    }

    pub fn per_rank(stat: ScalingStat, ratios: Vec<f64>) -> Self {
        ScalingTerm { stat, ratios }
    }

    pub fn ratio_at(&self, rank: usize) -> f64 {
        value_at_rank(&self.ratios, rank)
    }
}

/// Normalized ability formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAbility {
    pub id: String,
    pub name: String,
    pub damage_type: DamageType,
    /// Base damage per rank
    pub base_damage: Vec<f64>,
    pub scalings: Vec<ScalingTerm>,
    /// False when the descriptor could not be understood
    pub valid: bool,
}

impl ParsedAbility {
    /// Placeholder for a descriptor that matched no known shape
    pub fn invalid(id: impl Into<String>) -> Self {
        ParsedAbility {
            id: id.into(),
            name: String::new(),
            damage_type: DamageType::Magic,
            base_damage: Vec::new(),
            scalings: Vec::new(),
            valid: false,
        }
    }

    /// Number of ranks described by the base damage and ratios
    pub fn max_rank(&self) -> usize {
        self.scalings
            .iter()
            .map(|term| term.ratios.len())
            .chain(std::iter::once(self.base_damage.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn base_damage_at(&self, rank: usize) -> f64 {
        value_at_rank(&self.base_damage, rank)
    }

    /// Display label, falling back to the id when no name was supplied
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
