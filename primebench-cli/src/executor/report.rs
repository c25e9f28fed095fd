//! Report Building
//!
//! Combines the run outcome and its statistics into a serializable `Report`.

use super::execution::RunOutcome;
use super::metadata::build_report_meta;
use super::statistics::StrategyStatistics;
use primebench_report::{Report, StrategyMetrics};
use std::time::Duration;

/// Build a complete Report from a run and its statistics
pub fn build_report(outcome: &RunOutcome, stats: &StrategyStatistics) -> Report {
    Report {
        meta: build_report_meta(outcome),
        first_run: outcome.first_run,
        sequential: StrategyMetrics::new(&stats.sequential, to_nanos(&outcome.sequential)),
        parallel: StrategyMetrics::new(&stats.parallel, to_nanos(&outcome.parallel)),
        speedup: stats.comparison.speedup,
        total_duration_ms: outcome.total_duration.as_secs_f64() * 1000.0,
    }
}

fn to_nanos(samples: &[Duration]) -> Vec<u64> {
    samples
        .iter()
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .collect()
}
