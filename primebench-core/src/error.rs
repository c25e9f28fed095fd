//! Scan errors

use std::time::Duration;
use thiserror::Error;

/// Failures raised while constructing or running a scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// Range bounds are reversed
    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// Requested start
        start: i64,
        /// Requested end
        end: i64,
    },

    /// Worker count of zero
    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    /// The worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    PoolBuild(String),

    /// Not every partition finished within the join timeout
    #[error("Timeout after {timeout:?} waiting for workers ({completed}/{expected} partitions finished)")]
    JoinTimeout {
        /// Configured join timeout
        timeout: Duration,
        /// Partitions that reported before the deadline
        completed: usize,
        /// Partitions dispatched
        expected: usize,
    },

    /// A partition scan did not produce a result
    #[error("Worker for partition {partition} failed: {message}")]
    WorkerFailure {
        /// Index of the failed partition
        partition: usize,
        /// Panic payload or disconnect reason
        message: String,
    },
}
