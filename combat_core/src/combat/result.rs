//! Damage results - presentation-ready outcomes of damage resolution

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one damage instance against a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDamageResult {
    pub label: String,
    /// Damage before mitigation
    pub raw_damage: f64,
    /// Damage after mitigation, rounded to a whole number
    pub mitigated_damage: f64,
    pub damage_type: DamageType,
    /// Human-readable explanation of how the numbers were reached
    pub breakdown: String,
}

impl SingleDamageResult {
    /// Damage prevented by the target's defenses
    pub fn damage_prevented(&self) -> f64 {
        (self.raw_damage - self.mitigated_damage).max(0.0)
    }

    /// Mitigation as a percentage of raw damage
    pub fn mitigation_percent(&self) -> f64 {
        if self.raw_damage <= 0.0 {
            return 0.0;
        }
        (self.damage_prevented() / self.raw_damage * 100.0).clamp(0.0, 100.0)
    }
}

/// An ordered set of damage results, e.g. an auto-attack plus a spell rotation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub hits: Vec<SingleDamageResult>,
}

impl DamageReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, hit: SingleDamageResult) {
        self.hits.push(hit);
    }

    /// Builder-style push
    pub fn with(mut self, hit: SingleDamageResult) -> Self {
        self.hits.push(hit);
        self
    }

    pub fn total_raw(&self) -> f64 {
        self.hits.iter().map(|h| h.raw_damage).sum()
    }

    pub fn total_mitigated(&self) -> f64 {
        self.hits.iter().map(|h| h.mitigated_damage).sum()
    }

    /// Total damage dealt of one type
    pub fn damage_of_type(&self, damage_type: DamageType) -> f64 {
        self.hits
            .iter()
            .filter(|h| h.damage_type == damage_type)
            .map(|h| h.mitigated_damage)
            .sum()
    }

    /// Share of the target's hp removed by the whole report
    pub fn percent_of_health(&self, target_hp: f64) -> f64 {
        if target_hp <= 0.0 {
            return 0.0;
        }
        self.total_mitigated() / target_hp * 100.0
    }

    /// Whether the report's damage is enough to remove `target_hp`
    pub fn is_lethal(&self, target_hp: f64) -> bool {
        self.total_mitigated() >= target_hp
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.hits.is_empty() {
            return "No damage".to_string();
        }

        let mut parts: Vec<String> = self
            .hits
            .iter()
            .map(|h| format!("{} {:.0}", h.label, h.mitigated_damage))
            .collect();
        parts.push(format!(
            "total {:.0} ({:.0} raw)",
            self.total_mitigated(),
            self.total_raw()
        ));
        parts.join(", ")
    }
}
