//! Strategy Comparison
//!
//! Compares a baseline (sequential) against a candidate (parallel) by their
//! mean durations.

use crate::summary::SummaryStatistics;

/// Mean-based comparison of two strategies
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupComparison {
    /// Baseline mean in nanoseconds
    pub baseline_mean_ns: u64,
    /// Candidate mean in nanoseconds
    pub candidate_mean_ns: u64,
    /// `baseline / candidate` (> 1.0 means the candidate is faster)
    pub speedup: f64,
}

/// Ratio `baseline / candidate`.
///
/// A zero candidate mean yields `f64::INFINITY`, or 1.0 when the baseline is
/// zero as well.
pub fn speedup(baseline_ns: u64, candidate_ns: u64) -> f64 {
    match (baseline_ns, candidate_ns) {
        (0, 0) => 1.0,
        (_, 0) => f64::INFINITY,
        (b, c) => b as f64 / c as f64,
    }
}

/// Compare two summaries by their integer means
pub fn compare_means(
    baseline: &SummaryStatistics,
    candidate: &SummaryStatistics,
) -> SpeedupComparison {
    SpeedupComparison {
        baseline_mean_ns: baseline.mean_ns,
        candidate_mean_ns: candidate.mean_ns,
        speedup: speedup(baseline.mean_ns, candidate.mean_ns),
    }
}
