//! System Metadata Collection
//!
//! Collects the host details recorded alongside every report. Linux-specific
//! data (CPU model) degrades to "Unknown" on other platforms.

use super::execution::{RunOutcome, default_workers};
use chrono::Utc;
use primebench_report::{ReportConfig, ReportMeta, SCHEMA_VERSION, SystemInfo};

fn host_cores() -> u32 {
    u32::try_from(default_workers()).unwrap_or(u32::MAX)
}

/// Build report metadata from the run outcome and the host
pub fn build_report_meta(outcome: &RunOutcome) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: host_cores(),
    };

    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config: ReportConfig {
            range_start: outcome.range.start(),
            range_end: outcome.range.end(),
            runs: outcome.sequential.len(),
            workers: outcome.workers,
            join_timeout_ms: u64::try_from(outcome.join_timeout.as_millis()).unwrap_or(u64::MAX),
        },
    }
}

/// First `model name` entry of /proc/cpuinfo
#[cfg(target_os = "linux")]
fn cpu_model() -> Option<String> {
    let cpuinfo = std::fs::read_to_string("/proc/cpuinfo").ok()?;
    cpuinfo.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == "model name").then(|| value.trim().to_string())
    })
}

#[cfg(not(target_os = "linux"))]
fn cpu_model() -> Option<String> {
    None
}
