//! Raw ability descriptor shapes as supplied by external game data

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A raw ability or passive descriptor, discriminated by its `format` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum AbilityDescriptor {
    /// Tooltip-style spell data: effect arrays plus linked ratio vars
    Spell(SpellDescriptor),
    /// Data-mined formula: named data values plus numeric stat calculations
    Formula(FormulaDescriptor),
    /// Any other discriminant
    #[serde(other)]
    Unknown,
}

/// Tooltip-style spell data
///
/// ```json
/// {
///   "format": "spell", "id": "AnnieQ", "name": "Disintegrate",
///   "tooltip": "Deals {{ e1 }} (+{{ a1 }}) <magicDamage>magic damage</magicDamage>",
///   "effect": [null, [80, 115, 150, 185, 220]],
///   "vars": [{ "key": "a1", "link": "spelldamage", "coeff": 0.75 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Tooltip markup; damage type tags are read from it when no explicit type is set
    #[serde(default)]
    pub tooltip: String,
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default, alias = "maxrank")]
    pub max_rank: Option<usize>,
    /// Per-rank effect arrays; slot 0 is conventionally empty
    #[serde(default, alias = "effectAmount")]
    pub effect: Vec<Option<Vec<f64>>>,
    /// Which effect slot holds the base damage
    #[serde(default = "default_base_effect")]
    pub base_effect: usize,
    /// Terms that do not fit [`SpellVar`] are dropped
    #[serde(default, deserialize_with = "lenient_terms")]
    pub vars: Vec<SpellVar>,
}

fn default_base_effect() -> usize {
    1
}

/// Read a term list element by element, dropping entries that fail to
/// deserialize instead of failing the whole descriptor
fn lenient_terms<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(term) => Some(term),
            Err(err) => {
                tracing::debug!(error = %err, "dropping malformed scaling term");
                None
            }
        })
        .collect())
}

/// A ratio linked to an attacker stat by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellVar {
    #[serde(default)]
    pub key: String,
    pub link: String,
    pub coeff: Coefficient,
}

/// A coefficient given either once for every rank or per rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coefficient {
    Single(f64),
    PerRank(Vec<f64>),
}

impl Coefficient {
    pub fn into_values(self) -> Vec<f64> {
        match self {
            Coefficient::Single(value) => vec![value],
            Coefficient::PerRank(values) => values,
        }
    }
}

/// Data-mined formula
///
/// ```json
/// {
///   "format": "formula", "id": "AnnieQ", "damage_type": "kMagic",
///   "data_values": [{ "name": "BaseDamage", "values": [80, 115, 150, 185, 220] }],
///   "base_damage": "BaseDamage",
///   "calculations": [{ "stat": 0, "coefficient": 0.75 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub max_rank: Option<usize>,
    #[serde(default)]
    pub data_values: Vec<DataValue>,
    /// Name of the data value holding per-rank base damage
    pub base_damage: String,
    /// Terms that do not fit [`FormulaCalculation`] are dropped
    #[serde(default, deserialize_with = "lenient_terms")]
    pub calculations: Vec<FormulaCalculation>,
}

impl FormulaDescriptor {
    /// Look up a data value by name, ignoring ASCII case
    pub fn data_value(&self, name: &str) -> Option<&[f64]> {
        self.data_values
            .iter()
            .find(|dv| dv.name.eq_ignore_ascii_case(name))
            .map(|dv| dv.values.as_slice())
    }
}

/// Named per-rank values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataValue {
    pub name: String,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// One stat contribution in a data-mined formula
///
/// `stat` is the numeric stat id, `part` selects total/base/bonus, and the
/// ratio is either inline (`coefficient`) or read from a data value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaCalculation {
    pub stat: u32,
    #[serde(default)]
    pub part: Option<String>,
    #[serde(default)]
    pub coefficient: Option<Coefficient>,
    #[serde(default)]
    pub data_value: Option<String>,
}
