//! # suriya-insight — Results Derivation
//!
//! Pure functions behind the results dashboard. Nothing here performs IO,
//! reads a clock, or touches an RNG; every figure is recomputed on demand
//! from its inputs, so callers can never observe a stale value.
//!
//! - **Efficiency** (`efficiency.rs`): the per-province "efficiency score"
//!   and seasonal sun-hour figures. These are synthetic placeholder numbers
//!   derived from the province id's character sum, not geophysical data,
//!   but they are stable: the same `(province, tier)` pair always produces
//!   bit-identical output.
//!
//! - **Usage** (`usage.rs`): normalizes appliance kWh data into
//!   percentage-of-total shares for the usage chart, defaulting to the
//!   fixed sample set when no data is supplied.

pub mod efficiency;
pub mod usage;

pub use efficiency::{
    EfficiencyTier, ProvinceEfficiency, SeasonalSunHours, NATIONAL_AVERAGE_SCORE,
};
pub use usage::{UsageBreakdown, UsageDatum, UsageShare, DEFAULT_COLORS};
