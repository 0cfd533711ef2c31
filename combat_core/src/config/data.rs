//! Game data loading: champion curves, item tables and ability descriptors

use super::{ConfigError, GameConstants};
use crate::ability::{parse_value, ParsedAbility};
use crate::source::{BaseAttributeCurve, ItemStatTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Champion id -> base attribute curve
pub type ChampionCurves = HashMap<String, BaseAttributeCurve>;

/// Container for champion curve files
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChampionsFile {
    #[serde(default)]
    champions: ChampionCurves,
}

/// Load game constants from a TOML file
pub fn load_constants(path: &Path) -> Result<GameConstants, ConfigError> {
    super::load_toml(path)
}

/// Load an item stat table from a TOML file
pub fn load_item_table(path: &Path) -> Result<ItemStatTable, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_item_table(&content)
}

/// Parse an item stat table from a TOML string
pub fn parse_item_table(content: &str) -> Result<ItemStatTable, ConfigError> {
    let table: ItemStatTable = super::parse_toml(content)?;

    for (id, extra) in &table.supplementary {
        if extra.armor_pen_percent < 0.0 || extra.magic_pen_percent < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "item {} has negative penetration percent",
                id
            )));
        }
    }

    Ok(table)
}

/// Load champion curves from a TOML file
pub fn load_champion_curves(path: &Path) -> Result<ChampionCurves, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_champion_curves(&content)
}

/// Parse champion curves from a TOML string
///
/// Each curve's `id` is filled from its table key when left empty.
pub fn parse_champion_curves(content: &str) -> Result<ChampionCurves, ConfigError> {
    let file: ChampionsFile = super::parse_toml(content)?;

    let mut curves = HashMap::new();
    for (id, mut curve) in file.champions {
        if curve.attack_speed < 0.0 || curve.hp < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "champion {} has a negative base stat",
                id
            )));
        }
        if curve.id.is_empty() {
            curve.id = id.clone();
        }
        curves.insert(id, curve);
    }

    Ok(curves)
}

/// Load ability descriptors from a JSON file
pub fn load_abilities(path: &Path) -> Result<Vec<ParsedAbility>, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_abilities(&content)
}

/// Parse a JSON array of raw ability descriptors
///
/// Only a malformed document is an error; individual descriptors that match
/// neither known shape come back as invalid abilities.
pub fn parse_abilities(content: &str) -> Result<Vec<ParsedAbility>, ConfigError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(content)?;
    Ok(raw.iter().map(parse_value).collect())
}

/// Bundled default constants
pub fn default_constants() -> GameConstants {
    let toml = include_str!("../../config/constants.toml");
    super::parse_toml(toml).unwrap_or_else(|_| GameConstants::default())
}

/// Bundled item table
pub fn default_item_table() -> ItemStatTable {
    let toml = include_str!("../../config/items.toml");
    parse_item_table(toml).unwrap_or_default()
}

/// Bundled champion curves
pub fn default_champion_curves() -> ChampionCurves {
    let toml = include_str!("../../config/champions.toml");
    parse_champion_curves(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants_match_builtin() {
        assert_eq!(default_constants(), GameConstants::default());
    }

    #[test]
    fn test_default_item_table_loads() {
        let table = default_item_table();
        assert!(table.get("3089").is_some());
        let long_sword = table.get("1036").unwrap();
        assert!((long_sword.stats["FlatPhysicalDamageMod"] - 10.0).abs() < f64::EPSILON);
        assert!((table.get_supplementary("3142").unwrap().lethality - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_champions_have_ids() {
        let curves = default_champion_curves();
        let annie = &curves["Annie"];
        assert_eq!(annie.id, "Annie");
        assert!((annie.hp - 560.0).abs() < f64::EPSILON);
        // Garen has no mana entry at all
        assert!((curves["Garen"].mp - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_penetration_rejected() {
        let toml = r#"
[supplementary.bad]
armor_pen_percent = -0.2
"#;
        assert!(matches!(
            parse_item_table(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            parse_champion_curves("[champions.Annie\nhp = 1"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_abilities_keeps_invalid_entries() {
        let json = r#"[
            {"format": "formula", "id": "Q", "damage_type": "magic",
             "data_values": [{"name": "BaseDamage", "values": [80, 120]}],
             "base_damage": "BaseDamage", "calculations": []},
            {"format": "mystery"}
        ]"#;
        let abilities = parse_abilities(json).unwrap();
        assert_eq!(abilities.len(), 2);
        assert!(abilities[0].valid);
        assert!(!abilities[1].valid);
    }

    #[test]
    fn test_parse_abilities_rejects_bad_json() {
        assert!(matches!(parse_abilities("[{"), Err(ConfigError::JsonError(_))));
    }
}
