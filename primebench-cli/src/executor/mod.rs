//! Benchmark Executor
//!
//! Drives repeated scans and turns the collected samples into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! DriverConfig
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Time sequential + parallel scans, N runs
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Per-strategy summaries + speedup
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build Report with metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```

mod execution;
mod formatting;
mod metadata;
mod report;
mod statistics;

pub use execution::{BenchmarkDriver, DriverConfig, RunOutcome, default_workers};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
pub use report::build_report;
pub use statistics::{StrategyStatistics, compute_statistics};
