//! Configuration and game-data loading from TOML/JSON files

mod constants;
mod data;

pub use constants::{
    AbilityPowerAmplifier, AmplifierConstants, CritAmplifier, CritConstants, GameConstants,
    LethalityConstants,
};
pub use data::{
    default_champion_curves, default_constants, default_item_table, load_abilities,
    load_champion_curves, load_constants, load_item_table, parse_abilities,
    parse_champion_curves, parse_item_table, ChampionCurves,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
