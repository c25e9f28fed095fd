//! Summary Statistics
//!
//! The mean is an integer-nanosecond arithmetic mean so the headline numbers
//! stay exact. Dispersion figures are computed in `f64`.

use crate::NANOS_PER_MILLI;
use crate::percentiles::compute_percentile;
use std::time::Duration;

/// Summary of one strategy's timing samples (all values in nanoseconds)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStatistics {
    /// Integer arithmetic mean
    pub mean_ns: u64,
    /// Median
    pub median_ns: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev_ns: f64,
    /// Fastest sample
    pub min_ns: u64,
    /// Slowest sample
    pub max_ns: u64,
    /// Number of samples
    pub sample_count: usize,
}

impl SummaryStatistics {
    /// Mean in whole milliseconds (truncated)
    pub fn mean_ms(&self) -> u64 {
        self.mean_ns / NANOS_PER_MILLI
    }
}

/// Arithmetic mean of `samples`, truncated to whole nanoseconds.
///
/// Returns `Duration::ZERO` for an empty slice.
pub fn mean_duration(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    let mean = total / samples.len() as u128;
    Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX))
}

/// Compute summary statistics for a set of timing samples
pub fn compute_summary(samples: &[Duration]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let nanos: Vec<u64> = samples
        .iter()
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .collect();
    let as_f64: Vec<f64> = nanos.iter().map(|&n| n as f64).collect();

    let mean_ns = u64::try_from(mean_duration(samples).as_nanos()).unwrap_or(u64::MAX);

    let std_dev_ns = if as_f64.len() < 2 {
        0.0
    } else {
        let mean = as_f64.iter().sum::<f64>() / as_f64.len() as f64;
        let variance =
            as_f64.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (as_f64.len() - 1) as f64;
        variance.sqrt()
    };

    SummaryStatistics {
        mean_ns,
        median_ns: compute_percentile(&as_f64, 50.0),
        std_dev_ns,
        min_ns: nanos.iter().copied().min().unwrap_or(0),
        max_ns: nanos.iter().copied().max().unwrap_or(0),
        sample_count: nanos.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_basic_summary() {
        let samples = vec![ms(10), ms(20), ms(30), ms(40), ms(50)];
        let summary = compute_summary(&samples);

        assert_eq!(summary.mean_ns, 30_000_000);
        assert_eq!(summary.mean_ms(), 30);
        assert!((summary.median_ns - 30_000_000.0).abs() < 1.0);
        assert_eq!(summary.min_ns, 10_000_000);
        assert_eq!(summary.max_ns, 50_000_000);
        assert_eq!(summary.sample_count, 5);
        assert!(summary.std_dev_ns > 0.0);
    }

    #[test]
    fn test_mean_truncates() {
        let samples = [Duration::from_nanos(1), Duration::from_nanos(2)];
        assert_eq!(mean_duration(&samples), Duration::from_nanos(1));
    }

    #[test]
    fn test_mean_ms_truncates() {
        let summary = compute_summary(&[Duration::from_nanos(1_999_999)]);
        assert_eq!(summary.mean_ms(), 1);
    }

    #[test]
    fn test_constant_samples_have_no_spread() {
        let summary = compute_summary(&vec![ms(100); 5]);
        assert_eq!(summary.std_dev_ns, 0.0);
        assert_eq!(summary.min_ns, summary.max_ns);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.mean_ns, 0);
        assert_eq!(mean_duration(&[]), Duration::ZERO);
    }
}
