//! Configuration loading from primebench.toml
//!
//! PrimeBench configuration can be specified in a `primebench.toml` file in the
//! project root. The configuration is discovered by walking up from the current
//! directory. Command-line flags override every value found here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Name of the configuration file looked up by [`BenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "primebench.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`BenchConfig`]
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Unparseable duration string
    #[error("Invalid duration '{0}'")]
    InvalidDuration(String),

    /// Range start after range end
    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// Configured start
        start: i64,
        /// Configured end
        end: i64,
    },

    /// A count that must be positive was zero
    #[error("{field} must be at least 1")]
    Zero {
        /// Offending setting
        field: &'static str,
    },

    /// Unknown output format
    #[error("{0}")]
    Format(String),
}

/// PrimeBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchConfig {
    /// Scanned range
    #[serde(default)]
    pub range: RangeConfig,
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Inclusive bounds of the scanned range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    /// First integer tested
    #[serde(default = "default_start")]
    pub start: i64,
    /// Last integer tested (inclusive)
    #[serde(default = "default_end")]
    pub end: i64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

fn default_start() -> i64 {
    1
}
fn default_end() -> i64 {
    1_000_000
}

/// Runner configuration for benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of timed repetitions per strategy
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Parallel worker count (None = available hardware concurrency)
    #[serde(default)]
    pub workers: Option<usize>,
    /// Maximum wait for the parallel pool to join (e.g., "60s", "500ms")
    #[serde(default = "default_join_timeout")]
    pub join_timeout: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            workers: None,
            join_timeout: default_join_timeout(),
        }
    }
}

fn default_runs() -> usize {
    5
}
fn default_join_timeout() -> String {
    "60s".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Save JSON baseline after each run
    #[serde(default)]
    pub save_baseline: bool,
    /// Baseline file path
    #[serde(default)]
    pub baseline_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            save_baseline: false,
            baseline_path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Discover and load configuration by walking up from the current directory.
    ///
    /// Returns `Ok(None)` when no file is found; a file that exists but does not
    /// parse is an error.
    pub fn discover() -> Result<Option<Self>, ConfigError> {
        let Ok(mut dir) = std::env::current_dir() else {
            return Ok(None);
        };
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                tracing::debug!(path = %config_path.display(), "loading configuration");
                return Self::load(&config_path).map(Some);
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# PrimeBench Configuration

[range]
# Inclusive bounds of the scanned range
start = 1
end = 1000000

[runner]
# Timed repetitions per strategy
runs = 5
# Parallel worker count (defaults to available hardware concurrency)
# workers = 4
# Maximum wait for the parallel pool to finish
join_timeout = "60s"

[output]
# Output format: human, json
format = "human"
# Save JSON baseline after each run
save_baseline = false
# Baseline file (uncomment to override target/primebench/baseline.json)
# baseline_path = "baseline.json"
"#
        .to_string()
    }

    /// Parse duration string (e.g., "3s", "500ms", "2m")
    pub fn parse_duration(s: &str) -> Result<Duration, ConfigError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::InvalidDuration(s.to_string()));
        }

        // Find where the number ends and unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic() || *c == 'µ')
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDuration(s.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidDuration(s.to_string()));
        }

        let multiplier: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(ConfigError::InvalidDuration(s.to_string())),
        };

        Ok(Duration::from_nanos((value * multiplier as f64) as u64))
    }
}
