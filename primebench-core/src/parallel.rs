//! Partitioned Parallel Scanner
//!
//! Splits a range into one contiguous partition per worker, scans every
//! partition on a dedicated rayon pool and fans the results back in over a
//! channel.
//!
//! ```text
//!            Range
//!              │ partition(k)
//!     ┌────────┼────────┐
//!     ▼        ▼        ▼
//!  worker 0  worker 1 … worker k-1    (fresh pool, k threads)
//!     │        │        │
//!     └──── mpsc (index, result) ─────┐
//!                                     ▼
//!                     join with deadline, reorder by index
//! ```
//!
//! The join deadline only bounds how long the caller waits. Workers are never
//! cancelled; after a timeout they finish on their own and their results are
//! discarded.

use crate::{PrimeList, Range, ScanError, scan};
use rayon::ThreadPoolBuilder;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Join timeout used by [`scan_parallel`]
pub const DEFAULT_JOIN_TIMEOUT: Duration = Duration::from_secs(60);

/// Scan `range` on `worker_count` threads with the default join timeout.
pub fn scan_parallel(range: &Range, worker_count: usize) -> Result<PrimeList, ScanError> {
    ParallelScanner::new(worker_count)?.scan(range)
}

/// Fork/join prime scanner over a fixed-size worker pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelScanner {
    workers: usize,
    join_timeout: Duration,
}

type PartitionOutcome = (usize, Result<PrimeList, String>);

impl ParallelScanner {
    /// Create a scanner with `workers` threads and [`DEFAULT_JOIN_TIMEOUT`]
    pub fn new(workers: usize) -> Result<Self, ScanError> {
        if workers == 0 {
            return Err(ScanError::InvalidWorkerCount);
        }
        Ok(Self {
            workers,
            join_timeout: DEFAULT_JOIN_TIMEOUT,
        })
    }

    /// Override the maximum time to wait for all partitions
    pub fn with_join_timeout(mut self, join_timeout: Duration) -> Self {
        self.join_timeout = join_timeout;
        self
    }

    /// Number of workers (and partitions) per scan
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Maximum time the caller waits for the pool
    pub fn join_timeout(&self) -> Duration {
        self.join_timeout
    }

    /// Collect every prime in `range`, in ascending order.
    ///
    /// Results are concatenated in partition order, so the output is identical
    /// to the sequential [`scan`] regardless of worker count.
    pub fn scan(&self, range: &Range) -> Result<PrimeList, ScanError> {
        self.scan_with(range, scan)
    }

    pub(crate) fn scan_with<F>(&self, range: &Range, scan_part: F) -> Result<PrimeList, ScanError>
    where
        F: Fn(&Range) -> PrimeList + Send + Sync + 'static,
    {
        let parts = range.partition(self.workers)?;
        let expected = parts.len();

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("primebench-worker-{i}"))
            .build()
            .map_err(|e| ScanError::PoolBuild(e.to_string()))?;

        debug!(range = %range, workers = self.workers, "dispatching partitions");

        let scan_part = Arc::new(scan_part);
        let (tx, rx) = mpsc::channel::<PartitionOutcome>();

        for (index, part) in parts.into_iter().enumerate() {
            let tx = tx.clone();
            let scan_part = Arc::clone(&scan_part);
            pool.spawn(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| (*scan_part)(&part)))
                    .map_err(|panic| {
                        if let Some(s) = panic.downcast_ref::<&str>() {
                            s.to_string()
                        } else if let Some(s) = panic.downcast_ref::<String>() {
                            s.clone()
                        } else {
                            "Unknown panic".to_string()
                        }
                    });

                if let Ok(primes) = &outcome {
                    trace!(partition = index, range = %part, primes = primes.len(), "partition scanned");
                }

                // The receiver is gone if the caller already timed out
                let _ = tx.send((index, outcome));
            });
        }
        drop(tx);

        let deadline = Instant::now() + self.join_timeout;
        let mut slots: Vec<Option<PrimeList>> = vec![None; expected];

        for completed in 0..expected {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok((index, Ok(primes))) => slots[index] = Some(primes),
                Ok((partition, Err(message))) => {
                    return Err(ScanError::WorkerFailure { partition, message });
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(ScanError::JoinTimeout {
                        timeout: self.join_timeout,
                        completed,
                        expected,
                    });
                }
                Err(RecvTimeoutError::Disconnected) => {
                    let partition = slots.iter().position(Option::is_none).unwrap_or_default();
                    return Err(ScanError::WorkerFailure {
                        partition,
                        message: "worker exited without reporting".to_string(),
                    });
                }
            }
        }

        let total = slots.iter().flatten().map(Vec::len).sum();
        let mut primes = PrimeList::with_capacity(total);
        for part in slots.into_iter().flatten() {
            primes.extend(part);
        }

        debug!(primes = primes.len(), "all partitions joined");
        Ok(primes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_sequential_for_any_worker_count() {
        let range = Range::new(1, 100).unwrap();
        let expected = scan(&range);
        for workers in [1, 2, 3, 4, 7, 10] {
            assert_eq!(
                scan_parallel(&range, workers).unwrap(),
                expected,
                "workers = {workers}"
            );
        }
    }

    #[test]
    fn test_single_worker_is_sequential() {
        for (start, end) in [(1, 1), (1, 2), (-20, 20), (90, 97), (1, 5_000)] {
            let range = Range::new(start, end).unwrap();
            assert_eq!(scan_parallel(&range, 1).unwrap(), scan(&range));
        }
    }

    #[test]
    fn test_more_workers_than_values() {
        let range = Range::new(2, 5).unwrap();
        assert_eq!(scan_parallel(&range, 8).unwrap(), vec![2, 3, 5]);
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(
            ParallelScanner::new(0),
            Err(ScanError::InvalidWorkerCount)
        ));
        let range = Range::new(1, 10).unwrap();
        assert!(matches!(
            scan_parallel(&range, 0),
            Err(ScanError::InvalidWorkerCount)
        ));
    }

    #[test]
    fn test_results_keep_partition_order() {
        // Partition 0 finishes last; output must still start with it
        let scanner = ParallelScanner::new(4).unwrap();
        let range = Range::new(1, 400).unwrap();
        let primes = scanner
            .scan_with(&range, |part| {
                if part.start() == 1 {
                    std::thread::sleep(Duration::from_millis(50));
                }
                scan(part)
            })
            .unwrap();
        assert_eq!(primes, scan(&range));
    }

    #[test]
    fn test_join_timeout() {
        let scanner = ParallelScanner::new(2)
            .unwrap()
            .with_join_timeout(Duration::from_millis(20));
        let range = Range::new(1, 100).unwrap();
        let result = scanner.scan_with(&range, |part| {
            std::thread::sleep(Duration::from_millis(500));
            scan(part)
        });

        match result {
            Err(ScanError::JoinTimeout {
                timeout,
                completed,
                expected,
            }) => {
                assert_eq!(timeout, Duration::from_millis(20));
                assert_eq!(completed, 0);
                assert_eq!(expected, 2);
            }
            other => panic!("expected JoinTimeout, got {other:?}"),
        }
    }

    #[test]
    fn test_worker_failure() {
        let scanner = ParallelScanner::new(3).unwrap();
        let range = Range::new(1, 90).unwrap();
        let result = scanner.scan_with(&range, |part| {
            if part.start() > 1 && part.end() < 90 {
                panic!("boom in {part}");
            }
            scan(part)
        });

        match result {
            Err(ScanError::WorkerFailure { partition, message }) => {
                assert_eq!(partition, 1);
                assert_eq!(message, "boom in 31..=60");
            }
            other => panic!("expected WorkerFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_accessors() {
        let scanner = ParallelScanner::new(6).unwrap();
        assert_eq!(scanner.workers(), 6);
        assert_eq!(scanner.join_timeout(), DEFAULT_JOIN_TIMEOUT);
        let scanner = scanner.with_join_timeout(Duration::from_secs(1));
        assert_eq!(scanner.join_timeout(), Duration::from_secs(1));
    }
}
