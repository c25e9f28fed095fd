#![warn(missing_docs)]
//! # PrimeBench
//!
//! Benchmarks two ways of enumerating the primes in an inclusive integer range:
//! - **Sequential**: one trial-division pass over the whole range
//! - **Parallel**: the range is split into one contiguous partition per worker,
//!   each partition is scanned on a fresh fixed-size thread pool, and the
//!   results are joined in partition order
//!
//! The driver repeats both strategies, reports the first run's prime counts as
//! a sanity check, and prints the mean time of each strategy and the speedup.
//!
//! ## Quick Start
//!
//! ```
//! use primebench::{Range, scan, scan_parallel};
//!
//! let range = Range::new(1, 50).unwrap();
//! let primes = scan(&range);
//! assert_eq!(primes.len(), 15);
//! assert_eq!(scan_parallel(&range, 4).unwrap(), primes);
//! ```

// Re-export core types
pub use primebench_core::{
    DEFAULT_JOIN_TIMEOUT, ParallelScanner, PrimeList, Range, ScanError, Timer, is_prime, scan,
    scan_parallel, timed,
};

// Re-export stats
pub use primebench_stats::{
    SpeedupComparison, SummaryStatistics, compare_means, compute_summary, mean_duration, speedup,
};

// Re-export report types
pub use primebench_report::{OutputFormat, PrimeCounts, Report, generate_json_report};

// Re-export the driver
pub use primebench_cli::{
    BenchConfig, BenchmarkDriver, Cli, ConfigError, DriverConfig, RunOutcome, build_report,
    compute_statistics, format_human_output, run_benchmark,
};

/// Run the PrimeBench CLI harness.
///
/// ```ignore
/// fn main() {
///     primebench::run().unwrap();
/// }
/// ```
pub use primebench_cli::run;
