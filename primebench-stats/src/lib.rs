#![warn(missing_docs)]
//! PrimeBench Statistical Engine
//!
//! Summarises repeated timing samples and compares two strategies:
//! - Arithmetic mean over integer nanoseconds
//! - Median, standard deviation, min and max
//! - Speedup ratio between a baseline and a candidate

mod comparison;
mod percentiles;
mod summary;

pub use comparison::{SpeedupComparison, compare_means, speedup};
pub use percentiles::compute_percentile;
pub use summary::{SummaryStatistics, compute_summary, mean_duration};

/// Nanoseconds per millisecond
pub const NANOS_PER_MILLI: u64 = 1_000_000;
