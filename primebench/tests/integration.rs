//! Integration tests for PrimeBench
//!
//! These tests verify the end-to-end behavior of the scanners and the driver.

use primebench::{
    BenchmarkDriver, DriverConfig, ParallelScanner, Range, ScanError, compute_statistics,
    format_human_output, is_prime, run_benchmark, scan, scan_parallel,
};
use std::time::Duration;

/// Primes up to one million, counted by both strategies
#[test]
fn test_one_million_prime_count() {
    let range = Range::new(1, 1_000_000).unwrap();
    let sequential = scan(&range);
    let parallel = scan_parallel(&range, 4).unwrap();

    assert_eq!(sequential.len(), 78_498);
    assert_eq!(parallel.len(), sequential.len());
    assert_eq!(parallel, sequential);
}

/// Worker count never changes the result
#[test]
fn test_partition_count_does_not_change_result() {
    let range = Range::new(1, 100).unwrap();
    let expected = scan(&range);
    assert_eq!(expected.len(), 25);

    for workers in [1, 2, 3, 4, 7, 10] {
        assert_eq!(scan_parallel(&range, workers).unwrap(), expected);
    }
}

/// Odd range shapes: negative start, single value, more workers than values
#[test]
fn test_parallel_edge_ranges() {
    for (start, end) in [(-100, 30), (97, 97), (0, 0), (1, 9), (7_919, 7_920)] {
        let range = Range::new(start, end).unwrap();
        for workers in [1, 2, 5, 16] {
            assert_eq!(
                scan_parallel(&range, workers).unwrap(),
                scan(&range),
                "range {range} with {workers} workers"
            );
        }
    }
}

/// Output agrees with the primality test element by element
#[test]
fn test_scan_agrees_with_is_prime() {
    let range = Range::new(-10, 500).unwrap();
    let primes = scan(&range);
    for n in range {
        assert_eq!(primes.binary_search(&n).is_ok(), is_prime(n), "n = {n}");
    }
}

/// A zero join timeout on a large range is a fatal error, not a partial result
#[test]
fn test_join_timeout_is_fatal() {
    let scanner = ParallelScanner::new(2)
        .unwrap()
        .with_join_timeout(Duration::ZERO);
    let range = Range::new(1, 400_000).unwrap();

    assert!(matches!(
        scanner.scan(&range),
        Err(ScanError::JoinTimeout { expected: 2, .. })
    ));
}

/// Driver → statistics → human report
#[test]
fn test_driver_end_to_end() {
    let config = DriverConfig {
        start: 1,
        end: 10_000,
        runs: 3,
        workers: 4,
        join_timeout: Duration::from_secs(30),
        show_progress: false,
    };

    let outcome = BenchmarkDriver::new(&config).unwrap().run().unwrap();
    assert_eq!(outcome.first_run.sequential, 1_229);
    assert_eq!(outcome.first_run.parallel, 1_229);
    assert_eq!(outcome.sequential.len(), 3);

    let stats = compute_statistics(&outcome);
    assert!(stats.sequential.mean_ns > 0);
    assert!(stats.parallel.mean_ns > 0);
    assert!(stats.comparison.speedup > 0.0);

    let report = run_benchmark(&config).unwrap();
    let text = format_human_output(&report);
    assert!(text.contains("Total Primes Found (Single-threaded): 1229"));
    assert!(text.contains("Total Primes Found (Multi-threaded): 1229"));
    assert!(text.contains("Number of Processor Cores: 4"));
    assert!(text.contains("Average Single-threaded Time: "));
    assert!(text.contains("Average Multi-threaded Time: "));
    assert!(text.contains(&format!("Speedup: {:.2}x", report.speedup)));
}

/// JSON report round trip through the public API
#[test]
fn test_json_report() {
    let config = DriverConfig {
        start: 1,
        end: 1_000,
        runs: 2,
        workers: 2,
        join_timeout: Duration::from_secs(30),
        show_progress: false,
    };
    let report = run_benchmark(&config).unwrap();
    let json = primebench::generate_json_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["first_run"]["sequential"], 168);
    assert_eq!(value["meta"]["config"]["runs"], 2);
    assert_eq!(value["sequential"]["samples_ns"].as_array().unwrap().len(), 2);
}

/// A failed run yields no report
#[test]
fn test_failed_run_produces_no_report() {
    let config = DriverConfig {
        start: 1,
        end: 400_000,
        runs: 2,
        workers: 1,
        join_timeout: Duration::ZERO,
        show_progress: false,
    };
    let err = run_benchmark(&config).unwrap_err();
    assert!(err.to_string().contains("Timeout"));
}
