//! StatSource - Externally supplied inputs that contribute to computed stats

mod curve;
mod item;

pub use curve::{BaseAttributeCurve, CurveSource};
pub use item::{ItemSource, ItemStatTable, ItemStats, SupplementaryStats};

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to a ComputedStats snapshot
///
/// Sources only ever add into the accumulator, so the order in which they
/// are applied does not change the result.
pub trait StatSource: Send + Sync {
    /// Identifier for this source (champion id, item id)
    fn id(&self) -> &str;

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
