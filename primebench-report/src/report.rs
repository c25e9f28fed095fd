//! Report Data Structures

use chrono::{DateTime, Utc};
use primebench_stats::SummaryStatistics;
use serde::{Deserialize, Deserializer, Serialize};

/// Current report schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub first_run: PrimeCounts,
    pub sequential: StrategyMetrics,
    pub parallel: StrategyMetrics,
    /// Mean sequential / mean parallel. Infinite when the parallel mean is
    /// zero; JSON writes that as `null`.
    #[serde(deserialize_with = "deserialize_speedup")]
    pub speedup: f64,
    pub total_duration_ms: f64,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Run configuration captured in report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub range_start: i64,
    pub range_end: i64,
    pub runs: usize,
    pub workers: usize,
    pub join_timeout_ms: u64,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu: String,
    pub cpu_cores: u32,
}

/// Prime counts observed on the first repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeCounts {
    pub sequential: usize,
    pub parallel: usize,
}

impl PrimeCounts {
    /// Whether both strategies agree
    pub fn matches(&self) -> bool {
        self.sequential == self.parallel
    }
}

/// Timing metrics for one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    pub samples: usize,
    pub mean_ns: u64,
    pub mean_ms: u64,
    pub median_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: u64,
    pub max_ns: u64,
    /// Raw per-run durations, in run order
    pub samples_ns: Vec<u64>,
}

impl StrategyMetrics {
    /// Build metrics from summary statistics and the raw samples
    pub fn new(stats: &SummaryStatistics, samples_ns: Vec<u64>) -> Self {
        Self {
            samples: stats.sample_count,
            mean_ns: stats.mean_ns,
            mean_ms: stats.mean_ms(),
            median_ns: stats.median_ns,
            std_dev_ns: stats.std_dev_ns,
            min_ns: stats.min_ns,
            max_ns: stats.max_ns,
            samples_ns,
        }
    }
}

fn deserialize_speedup<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}
