//! Stat aggregation - level curve plus item loadout into ComputedStats

mod aggregator;
mod computed;
mod growth;

pub use aggregator::StatAccumulator;
pub use computed::ComputedStats;
pub use growth::{
    attack_speed_at_level, level_growth_factor, round_thousandth, round_tenth, round_whole,
    stat_at_level,
};

use crate::config::GameConstants;
use crate::source::{BaseAttributeCurve, CurveSource, ItemSource, ItemStatTable, StatSource};

/// Compute combat stats for a champion at `level` wearing `item_ids`
///
/// Uses the default game constants. Level is clamped to 1..=18, duplicate
/// items are allowed and unknown item ids contribute nothing.
pub fn compute_stats<I, S>(
    curve: &BaseAttributeCurve,
    level: u32,
    item_ids: I,
    item_table: &ItemStatTable,
) -> ComputedStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    compute_stats_with(curve, level, item_ids, item_table, &GameConstants::default())
}

/// Same as [`compute_stats`] with explicit constants
pub fn compute_stats_with<I, S>(
    curve: &BaseAttributeCurve,
    level: u32,
    item_ids: I,
    item_table: &ItemStatTable,
    constants: &GameConstants,
) -> ComputedStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = StatAccumulator::new();

    CurveSource::new(curve, level).apply(&mut acc);

    for item_id in item_ids {
        ItemSource::lookup(item_table, item_id.as_ref()).apply(&mut acc);
    }

    let stats = acc.finish(constants);
    tracing::trace!(champion = %curve.id, level, ?stats, "computed stats");
    stats
}
