//! Game constants configuration

use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub amplifiers: AmplifierConstants,
    #[serde(default)]
    pub lethality: LethalityConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritConstants {
    /// Base critical strike multiplier (1.75 = 175%)
    #[serde(default = "default_base_multiplier")]
    pub base_multiplier: f64,
    /// Items whose passive adds to the crit multiplier
    #[serde(default = "default_crit_amplifiers")]
    pub amplifiers: Vec<CritAmplifier>,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            base_multiplier: default_base_multiplier(),
            amplifiers: default_crit_amplifiers(),
        }
    }
}

/// Crit multiplier bonus granted by an item, added to the base multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritAmplifier {
    pub item: String,
    pub bonus: f64,
}

fn default_base_multiplier() -> f64 {
    1.75
}

fn default_crit_amplifiers() -> Vec<CritAmplifier> {
    vec![CritAmplifier {
        item: "3031".to_string(),
        bonus: 0.40,
    }]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplifierConstants {
    /// Items that multiply summed ability power, applied once by presence
    #[serde(default = "default_ability_power_amplifiers")]
    pub ability_power: Vec<AbilityPowerAmplifier>,
}

impl Default for AmplifierConstants {
    fn default() -> Self {
        AmplifierConstants {
            ability_power: default_ability_power_amplifiers(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityPowerAmplifier {
    pub item: String,
    pub multiplier: f64,
}

fn default_ability_power_amplifiers() -> Vec<AbilityPowerAmplifier> {
    vec![AbilityPowerAmplifier {
        item: "3089".to_string(),
        multiplier: 1.35,
    }]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LethalityConstants {
    /// Share of lethality applied at level 0
    #[serde(default = "default_min_effectiveness")]
    pub min_effectiveness: f64,
    /// Extra share gained linearly up to level 18
    #[serde(default = "default_level_scaling")]
    pub level_scaling: f64,
}

impl Default for LethalityConstants {
    fn default() -> Self {
        LethalityConstants {
            min_effectiveness: default_min_effectiveness(),
            level_scaling: default_level_scaling(),
        }
    }
}

fn default_min_effectiveness() -> f64 {
    0.6
}
fn default_level_scaling() -> f64 {
    0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert!((constants.crit.base_multiplier - 1.75).abs() < f64::EPSILON);
        assert_eq!(constants.crit.amplifiers[0].item, "3031");
        assert!((constants.amplifiers.ability_power[0].multiplier - 1.35).abs() < f64::EPSILON);
        assert!((constants.lethality.min_effectiveness - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[crit]
base_multiplier = 2.0

[[crit.amplifiers]]
item = "3031"
bonus = 0.35

[[amplifiers.ability_power]]
item = "3089"
multiplier = 1.30

[lethality]
min_effectiveness = 0.6
level_scaling = 0.4
"#;

        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert!((constants.crit.base_multiplier - 2.0).abs() < f64::EPSILON);
        assert!((constants.crit.amplifiers[0].bonus - 0.35).abs() < f64::EPSILON);
        assert!((constants.amplifiers.ability_power[0].multiplier - 1.30).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let constants: GameConstants = toml::from_str("[crit]\nbase_multiplier = 1.5\n").unwrap();
        assert!((constants.crit.base_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(constants.crit.amplifiers.len(), 1);
        assert_eq!(constants.amplifiers.ability_power[0].item, "3089");
    }
}
