//! StatAccumulator - Collects contributions before the rounding checkpoints

use super::computed::ComputedStats;
use super::growth::{round_thousandth, round_tenth, round_whole};
use crate::config::GameConstants;
use crate::source::SupplementaryStats;
use std::collections::BTreeSet;

/// Accumulates stat contributions from the level curve and every item
///
/// All values are kept un-rounded; [`StatAccumulator::finish`] applies the
/// rounding checkpoints and the unique amplifiers exactly once.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    // === Level curve ===
    pub base_hp: f64,
    pub base_mp: f64,
    pub base_armor: f64,
    pub base_magic_resist: f64,
    pub base_attack_damage: f64,
    /// Level-grown attack speed before bonus attack speed
    pub base_attack_speed: f64,
    pub base_move_speed: f64,

    // === Item flat stats ===
    pub hp_flat: f64,
    pub mp_flat: f64,
    pub armor_flat: f64,
    pub magic_resist_flat: f64,
    pub attack_damage_flat: f64,
    pub ability_power_flat: f64,
    pub crit_chance_flat: f64,
    pub move_speed_flat: f64,
    pub move_speed_percent: f64,
    /// Summed bonus attack speed fraction, applied once after level growth
    pub bonus_attack_speed: f64,

    // === Supplementary ===
    pub lethality: f64,
    pub armor_pen_percent: f64,
    pub magic_pen_flat: f64,
    pub magic_pen_percent: f64,
    pub ability_haste: f64,

    /// Item ids present in the loadout (known items only)
    present_items: BTreeSet<String>,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Apply one item stat through the fixed stat-name mapping
    ///
    /// Returns `false` for names outside the mapping; those contribute nothing.
    pub fn apply_item_stat(&mut self, name: &str, value: f64) -> bool {
        match name {
            "FlatHPPoolMod" => self.hp_flat += value,
            "FlatMPPoolMod" => self.mp_flat += value,
            "FlatArmorMod" => self.armor_flat += value,
            "FlatSpellBlockMod" => self.magic_resist_flat += value,
            "FlatPhysicalDamageMod" => self.attack_damage_flat += value,
            "FlatMagicDamageMod" => self.ability_power_flat += value,
            "FlatCritChanceMod" => self.crit_chance_flat += value,
            "FlatMovementSpeedMod" => self.move_speed_flat += value,
            "PercentMovementSpeedMod" => self.move_speed_percent += value,
            "PercentAttackSpeedMod" => self.bonus_attack_speed += value,
            _ => return false,
        }
        true
    }

    /// Add an item's supplementary combat stats
    pub fn apply_supplementary(&mut self, stats: &SupplementaryStats) {
        self.lethality += stats.lethality;
        self.armor_pen_percent += stats.armor_pen_percent;
        self.magic_pen_flat += stats.magic_pen_flat;
        self.magic_pen_percent += stats.magic_pen_percent;
        self.ability_haste += stats.ability_haste;
    }

    /// Record that an item is in the loadout
    pub fn mark_present(&mut self, item_id: &str) {
        if !self.present_items.contains(item_id) {
            self.present_items.insert(item_id.to_string());
        }
    }

    pub fn is_present(&self, item_id: &str) -> bool {
        self.present_items.contains(item_id)
    }

    /// Multiplier on summed ability power from unique amplifier items
    ///
    /// Detection is by presence, so duplicates never stack. With several
    /// distinct amplifiers present, the largest one applies.
    pub fn ability_power_multiplier(&self, constants: &GameConstants) -> f64 {
        constants
            .amplifiers
            .ability_power
            .iter()
            .filter(|amp| self.is_present(&amp.item))
            .map(|amp| amp.multiplier)
            .fold(1.0, f64::max)
    }

    /// Crit multiplier bonus from crit amplifier items (largest present, once)
    pub fn crit_damage_bonus(&self, constants: &GameConstants) -> f64 {
        constants
            .crit
            .amplifiers
            .iter()
            .filter(|amp| self.is_present(&amp.item))
            .map(|amp| amp.bonus)
            .fold(0.0, f64::max)
    }

    /// Apply the rounding checkpoints and amplifiers to produce a snapshot
    pub fn finish(&self, constants: &GameConstants) -> ComputedStats {
        // Whole-number checkpoint
        let hp = round_whole(self.base_hp + self.hp_flat);
        let mp = round_whole(self.base_mp + self.mp_flat);

        // Tenth checkpoint; total AD is built from the un-rounded curve value
        let armor = round_tenth(self.base_armor + self.armor_flat);
        let magic_resist = round_tenth(self.base_magic_resist + self.magic_resist_flat);
        let base_attack_damage = round_tenth(self.base_attack_damage);
        let attack_damage = round_tenth(self.base_attack_damage + self.attack_damage_flat);

        // Thousandth checkpoint; bonus applied once on top of level growth
        let attack_speed =
            round_thousandth(self.base_attack_speed * (1.0 + self.bonus_attack_speed));

        let ability_power = self.ability_power_flat * self.ability_power_multiplier(constants);
        let move_speed =
            (self.base_move_speed + self.move_speed_flat) * (1.0 + self.move_speed_percent);

        ComputedStats {
            hp,
            mp,
            armor,
            magic_resist,
            attack_damage,
            base_attack_damage,
            attack_speed,
            ability_power,
            crit_chance: self.crit_chance_flat.clamp(0.0, 1.0),
            crit_damage_bonus: self.crit_damage_bonus(constants),
            lethality: self.lethality,
            armor_pen_percent: self.armor_pen_percent.clamp(0.0, 1.0),
            magic_pen_flat: self.magic_pen_flat,
            magic_pen_percent: self.magic_pen_percent.clamp(0.0, 1.0),
            ability_haste: self.ability_haste,
            move_speed,
        }
    }
}
