//! BaseAttributeCurve - Per-champion base stats and per-level growth

use crate::source::StatSource;
use crate::stat_block::{attack_speed_at_level, stat_at_level, StatAccumulator};
use crate::types::clamp_level;
use serde::{Deserialize, Serialize};

/// Base value and per-level growth for each champion attribute
///
/// Field aliases accept the flat lowercase names used by the game's static
/// data files (`spellblock`, `attackspeedperlevel`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseAttributeCurve {
    /// Champion identifier (filled from the table key when loaded from a file)
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub hp: f64,
    #[serde(default, alias = "hpperlevel")]
    pub hp_per_level: f64,
    #[serde(default)]
    pub mp: f64,
    #[serde(default, alias = "mpperlevel")]
    pub mp_per_level: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(default, alias = "armorperlevel")]
    pub armor_per_level: f64,
    #[serde(default, alias = "spellblock")]
    pub magic_resist: f64,
    #[serde(default, alias = "spellblockperlevel")]
    pub magic_resist_per_level: f64,
    #[serde(default, alias = "attackdamage")]
    pub attack_damage: f64,
    #[serde(default, alias = "attackdamageperlevel")]
    pub attack_damage_per_level: f64,
    #[serde(default, alias = "attackspeed")]
    pub attack_speed: f64,
    /// Growth in percent of base attack speed (2.5 = 2.5%)
    #[serde(default, alias = "attackspeedperlevel")]
    pub attack_speed_per_level: f64,
    #[serde(default, alias = "movespeed")]
    pub move_speed: f64,
    #[serde(default, alias = "movespeedperlevel")]
    pub move_speed_per_level: f64,
}

/// Level-curve contribution of a champion at a given level
pub struct CurveSource<'a> {
    pub curve: &'a BaseAttributeCurve,
    /// Champion level, clamped to 1..=18 on construction
    pub level: u32,
}

impl<'a> CurveSource<'a> {
    pub fn new(curve: &'a BaseAttributeCurve, level: u32) -> Self {
        CurveSource {
            curve,
            level: clamp_level(level),
        }
    }
}

impl StatSource for CurveSource<'_> {
    fn id(&self) -> &str {
        &self.curve.id
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let c = self.curve;
        let level = self.level;

        stats.base_hp += stat_at_level(c.hp, c.hp_per_level, level);
        stats.base_mp += stat_at_level(c.mp, c.mp_per_level, level);
        stats.base_armor += stat_at_level(c.armor, c.armor_per_level, level);
        stats.base_magic_resist += stat_at_level(c.magic_resist, c.magic_resist_per_level, level);
        stats.base_attack_damage +=
            stat_at_level(c.attack_damage, c.attack_damage_per_level, level);
        stats.base_attack_speed +=
            attack_speed_at_level(c.attack_speed, c.attack_speed_per_level, level);
        stats.base_move_speed += stat_at_level(c.move_speed, c.move_speed_per_level, level);
    }
}
