//! Statistics Computation
//!
//! Summarises both strategies' timing samples and derives the speedup.
//!
//! The two summaries are independent, so they are computed side by side with
//! `rayon::join`.

use super::execution::RunOutcome;
use primebench_stats::{SpeedupComparison, SummaryStatistics, compare_means, compute_summary};

/// Summaries for both strategies plus their comparison
#[derive(Debug, Clone)]
pub struct StrategyStatistics {
    /// Sequential scan summary
    pub sequential: SummaryStatistics,
    /// Parallel scan summary
    pub parallel: SummaryStatistics,
    /// Sequential (baseline) vs. parallel (candidate)
    pub comparison: SpeedupComparison,
}

/// Compute statistics for a completed run
pub fn compute_statistics(outcome: &RunOutcome) -> StrategyStatistics {
    let (sequential, parallel) = rayon::join(
        || compute_summary(&outcome.sequential),
        || compute_summary(&outcome.parallel),
    );
    let comparison = compare_means(&sequential, &parallel);

    StrategyStatistics {
        sequential,
        parallel,
        comparison,
    }
}
