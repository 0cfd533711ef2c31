//! Combat results - value objects handed to the presentation layer

mod result;

pub use result::{DamageReport, SingleDamageResult};
