//! Output Formatting
//!
//! Human-readable output formatting for benchmark reports.
//!
//! The headline block has a fixed wording:
//!
//! ```text
//! Total Primes Found (Single-threaded): 78498
//! Total Primes Found (Multi-threaded): 78498
//!
//! Performance Results:
//! Number of Processor Cores: 8
//! Average Single-threaded Time: 312 ms
//! Average Multi-threaded Time: 71 ms
//! Speedup: 4.39x
//! ```
//!
//! A per-strategy detail block follows.

use primebench_report::{Report, StrategyMetrics};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Primes Found (Single-threaded): {}\n",
        report.first_run.sequential
    ));
    output.push_str(&format!(
        "Total Primes Found (Multi-threaded): {}\n",
        report.first_run.parallel
    ));
    if !report.first_run.matches() {
        output.push_str("Warning: prime counts differ between strategies\n");
    }

    output.push_str("\nPerformance Results:\n");
    output.push_str(&format!(
        "Number of Processor Cores: {}\n",
        report.meta.config.workers
    ));
    output.push_str(&format!(
        "Average Single-threaded Time: {} ms\n",
        report.sequential.mean_ms
    ));
    output.push_str(&format!(
        "Average Multi-threaded Time: {} ms\n",
        report.parallel.mean_ms
    ));
    output.push_str(&format!("Speedup: {:.2}x\n", report.speedup));

    let config = &report.meta.config;
    output.push_str(&format!(
        "\nDetails ({}..={}, {} runs)\n",
        config.range_start, config.range_end, config.runs
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');
    push_metrics(&mut output, "sequential", &report.sequential);
    push_metrics(&mut output, "parallel", &report.parallel);

    output
}

fn push_metrics(output: &mut String, label: &str, metrics: &StrategyMetrics) {
    output.push_str(&format!(
        "  {:<10}  median: {:.2} ms  stddev: {:.2} ms  min: {:.2} ms  max: {:.2} ms\n",
        label,
        metrics.median_ns / 1e6,
        metrics.std_dev_ns / 1e6,
        metrics.min_ns as f64 / 1e6,
        metrics.max_ns as f64 / 1e6,
    ));
}
