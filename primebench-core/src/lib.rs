#![warn(missing_docs)]
//! PrimeBench Core - Scanners
//!
//! This crate provides the computational side of the benchmark:
//! - `is_prime` trial-division primality test
//! - `Range` with static partitioning into contiguous sub-ranges
//! - `scan` sequential range scanner
//! - `ParallelScanner` fork/join scanner over a fixed rayon pool
//! - `Timer` monotonic nanosecond timing

mod error;
mod measure;
mod parallel;
mod prime;
mod range;
mod scan;

pub use error::ScanError;
pub use measure::{Timer, timed};
pub use parallel::{DEFAULT_JOIN_TIMEOUT, ParallelScanner, scan_parallel};
pub use prime::is_prime;
pub use range::Range;
pub use scan::scan;

/// Ascending list of primes produced by a single scan
pub type PrimeList = Vec<i64>;
