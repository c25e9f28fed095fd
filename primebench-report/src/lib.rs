#![warn(missing_docs)]
//! PrimeBench Report - Reporting
//!
//! Serializable report data model and machine-readable output. Human-readable
//! formatting lives with the CLI.

mod json;
mod report;

pub use json::{generate_json_report, parse_json_report};
pub use report::{
    PrimeCounts, Report, ReportConfig, ReportMeta, SCHEMA_VERSION, StrategyMetrics, SystemInfo,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    #[default]
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
