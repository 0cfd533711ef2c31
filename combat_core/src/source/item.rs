//! ItemSource - Stats from an equipped item

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Flat attribute deltas for a single item, keyed by game-data stat name
///
/// Recognized names are listed on [`StatAccumulator::apply_item_stat`];
/// anything else is carried along but contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Stat name -> value
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

impl ItemStats {
    pub fn new(name: impl Into<String>) -> Self {
        ItemStats {
            name: name.into(),
            stats: BTreeMap::new(),
        }
    }

    /// Builder-style stat insertion
    pub fn with_stat(mut self, stat: impl Into<String>, value: f64) -> Self {
        self.stats.insert(stat.into(), value);
        self
    }
}

/// Penetration and haste stats that the primary stat block does not carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryStats {
    #[serde(default)]
    pub lethality: f64,
    /// Fraction, 0.3 = 30%
    #[serde(default)]
    pub armor_pen_percent: f64,
    #[serde(default)]
    pub magic_pen_flat: f64,
    /// Fraction, 0.4 = 40%
    #[serde(default)]
    pub magic_pen_percent: f64,
    #[serde(default)]
    pub ability_haste: f64,
}

/// Item lookup tables: primary flat stats plus the supplementary combat stats
///
/// The two tables are independent; an item can appear in either, both, or
/// neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStatTable {
    #[serde(default)]
    pub items: HashMap<String, ItemStats>,
    #[serde(default)]
    pub supplementary: HashMap<String, SupplementaryStats>,
}

impl ItemStatTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item's flat stats
    pub fn insert(&mut self, id: impl Into<String>, stats: ItemStats) {
        self.items.insert(id.into(), stats);
    }

    /// Register an item's supplementary stats
    pub fn insert_supplementary(&mut self, id: impl Into<String>, stats: SupplementaryStats) {
        self.supplementary.insert(id.into(), stats);
    }

    pub fn get(&self, id: &str) -> Option<&ItemStats> {
        self.items.get(id)
    }

    pub fn get_supplementary(&self, id: &str) -> Option<&SupplementaryStats> {
        self.supplementary.get(id)
    }

    /// Whether the id appears in either table
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id) || self.supplementary.contains_key(id)
    }

    /// Number of distinct ids across both tables
    pub fn len(&self) -> usize {
        let supplementary_only = self
            .supplementary
            .keys()
            .filter(|id| !self.items.contains_key(*id))
            .count();
        self.items.len() + supplementary_only
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.supplementary.is_empty()
    }
}

/// One loadout entry resolved against the item tables
pub struct ItemSource<'a> {
    pub item_id: &'a str,
    pub stats: Option<&'a ItemStats>,
    pub supplementary: Option<&'a SupplementaryStats>,
}

impl<'a> ItemSource<'a> {
    /// Resolve an item id; ids missing from both tables yield an empty source
    pub fn lookup(table: &'a ItemStatTable, item_id: &'a str) -> Self {
        let stats = table.get(item_id);
        let supplementary = table.get_supplementary(item_id);
        if stats.is_none() && supplementary.is_none() {
            tracing::debug!(item_id, "unknown item id, contributes nothing");
        }
        ItemSource {
            item_id,
            stats,
            supplementary,
        }
    }

    /// Whether the item was found in at least one table
    pub fn is_known(&self) -> bool {
        self.stats.is_some() || self.supplementary.is_some()
    }
}

impl StatSource for ItemSource<'_> {
    fn id(&self) -> &str {
        self.item_id
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        if !self.is_known() {
            return;
        }
        stats.mark_present(self.item_id);

        if let Some(item) = self.stats {
            for (name, value) in &item.stats {
                if !stats.apply_item_stat(name, *value) {
                    tracing::debug!(
                        item_id = self.item_id,
                        stat = %name,
                        "unknown item stat ignored"
                    );
                }
            }
        }

        if let Some(extra) = self.supplementary {
            stats.apply_supplementary(extra);
        }
    }
}
