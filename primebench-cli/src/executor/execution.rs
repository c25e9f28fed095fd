//! Benchmark Execution
//!
//! Runs the sequential and parallel scanners back to back for a fixed number
//! of repetitions and records the wall-clock time of each.
//!
//! ## Data Flow
//!
//! ```text
//!   DriverConfig
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ BenchmarkDriver  │  scan → scan_parallel, repeated `runs` times
//! └────────┬─────────┘
//!          │
//!          ▼
//!    RunOutcome (first-run counts, per-run durations)
//! ```
//!
//! Any scan failure aborts the whole run; there are no retries and no partial
//! outcomes.

use indicatif::{ProgressBar, ProgressStyle};
use primebench_core::{
    DEFAULT_JOIN_TIMEOUT, ParallelScanner, Range, ScanError, Timer, scan, timed,
};
use primebench_report::PrimeCounts;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// First integer scanned
    pub start: i64,
    /// Last integer scanned (inclusive)
    pub end: i64,
    /// Timed repetitions per strategy
    pub runs: usize,
    /// Parallel worker count
    pub workers: usize,
    /// Maximum wait for the parallel pool to join
    pub join_timeout: Duration,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            start: 1,
            end: 1_000_000,
            runs: 5,
            workers: default_workers(),
            join_timeout: DEFAULT_JOIN_TIMEOUT,
            show_progress: true,
        }
    }
}

/// Worker count matching the host's available hardware concurrency
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Samples collected by a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Scanned range
    pub range: Range,
    /// Parallel worker count used
    pub workers: usize,
    /// Join timeout used
    pub join_timeout: Duration,
    /// Prime counts from the first repetition
    pub first_run: PrimeCounts,
    /// Sequential durations, in run order
    pub sequential: Vec<Duration>,
    /// Parallel durations, in run order
    pub parallel: Vec<Duration>,
    /// Wall-clock time of the whole run
    pub total_duration: Duration,
}

/// Repeatedly times both scan strategies over one range
#[derive(Debug, Clone)]
pub struct BenchmarkDriver {
    range: Range,
    runs: usize,
    scanner: ParallelScanner,
    show_progress: bool,
}

impl BenchmarkDriver {
    /// Validate `config` and build a driver
    pub fn new(config: &DriverConfig) -> Result<Self, ScanError> {
        let range = Range::new(config.start, config.end)?;
        let scanner = ParallelScanner::new(config.workers)?.with_join_timeout(config.join_timeout);
        Ok(Self {
            range,
            runs: config.runs.max(1),
            scanner,
            show_progress: config.show_progress,
        })
    }

    /// Scanned range
    pub fn range(&self) -> Range {
        self.range
    }

    /// Repetitions per strategy
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Execute every repetition
    pub fn run(&self) -> Result<RunOutcome, ScanError> {
        let timer = Timer::start();
        let pb = self.progress_bar();

        info!(
            range = %self.range,
            runs = self.runs,
            workers = self.scanner.workers(),
            "starting benchmark"
        );

        let mut sequential = Vec::with_capacity(self.runs);
        let mut parallel = Vec::with_capacity(self.runs);
        let mut first_run = None;

        for run in 0..self.runs {
            pb.set_message(format!("run {}/{}", run + 1, self.runs));

            let (seq_primes, seq_time) = timed(|| scan(&self.range));
            let (par_result, par_time) = timed(|| self.scanner.scan(&self.range));
            let par_primes = match par_result {
                Ok(primes) => primes,
                Err(e) => {
                    pb.abandon_with_message(format!("run {} failed", run + 1));
                    return Err(e);
                }
            };

            debug!(
                run = run + 1,
                sequential_ns = seq_time.as_nanos() as u64,
                parallel_ns = par_time.as_nanos() as u64,
                "run complete"
            );
            sequential.push(seq_time);
            parallel.push(par_time);

            if first_run.is_none() {
                let counts = PrimeCounts {
                    sequential: seq_primes.len(),
                    parallel: par_primes.len(),
                };
                info!(
                    sequential = counts.sequential,
                    parallel = counts.parallel,
                    "first run prime counts"
                );
                if !counts.matches() {
                    warn!(
                        sequential = counts.sequential,
                        parallel = counts.parallel,
                        "strategies disagree on prime count"
                    );
                }
                first_run = Some(counts);
            }

            pb.inc(1);
        }

        pb.finish_and_clear();

        Ok(RunOutcome {
            range: self.range,
            workers: self.scanner.workers(),
            join_timeout: self.scanner.join_timeout(),
            first_run: first_run.unwrap_or(PrimeCounts {
                sequential: 0,
                parallel: 0,
            }),
            sequential,
            parallel,
            total_duration: timer.elapsed(),
        })
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.runs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> DriverConfig {
        DriverConfig {
            start: 1,
            end: 2_000,
            runs: 3,
            workers: 3,
            join_timeout: Duration::from_secs(30),
            show_progress: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!((config.start, config.end), (1, 1_000_000));
        assert_eq!(config.runs, 5);
        assert_eq!(config.workers, default_workers());
        assert!(config.workers >= 1);
        assert_eq!(config.join_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_run_collects_one_sample_per_run() {
        let driver = BenchmarkDriver::new(&small_config()).unwrap();
        let outcome = driver.run().unwrap();

        assert_eq!(outcome.sequential.len(), 3);
        assert_eq!(outcome.parallel.len(), 3);
        assert_eq!(outcome.workers, 3);
        assert_eq!(outcome.first_run.sequential, 303);
        assert!(outcome.first_run.matches());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let reversed = DriverConfig {
            start: 10,
            end: 1,
            ..small_config()
        };
        assert!(matches!(
            BenchmarkDriver::new(&reversed),
            Err(ScanError::InvalidRange { .. })
        ));

        let no_workers = DriverConfig {
            workers: 0,
            ..small_config()
        };
        assert!(matches!(
            BenchmarkDriver::new(&no_workers),
            Err(ScanError::InvalidWorkerCount)
        ));
    }

    #[test]
    fn test_zero_runs_clamped() {
        let config = DriverConfig {
            runs: 0,
            ..small_config()
        };
        assert_eq!(BenchmarkDriver::new(&config).unwrap().runs(), 1);
    }

    #[test]
    fn test_join_timeout_aborts_run() {
        let config = DriverConfig {
            end: 300_000,
            workers: 1,
            join_timeout: Duration::ZERO,
            ..small_config()
        };
        let driver = BenchmarkDriver::new(&config).unwrap();
        assert!(matches!(
            driver.run(),
            Err(ScanError::JoinTimeout { .. })
        ));
    }
}
