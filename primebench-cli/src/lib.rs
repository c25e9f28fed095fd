#![warn(missing_docs)]
//! PrimeBench CLI Library
//!
//! Command-line harness around the benchmark driver: configuration layering
//! (defaults → `primebench.toml` → flags), logging setup, report output and
//! baseline saving.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     primebench_cli::run().unwrap();
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    BenchmarkDriver, DriverConfig, RunOutcome, StrategyStatistics, build_report,
    build_report_meta, compute_statistics, default_workers, format_human_output,
};

use clap::Parser;
use primebench_report::{OutputFormat, Report, generate_json_report};
use std::io::Write;
use std::path::PathBuf;

/// Default location of the saved baseline report
pub const DEFAULT_BASELINE_PATH: &str = "target/primebench/baseline.json";

/// PrimeBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "primebench")]
#[command(
    author,
    version,
    about = "PrimeBench - sequential vs. parallel prime scanning benchmark"
)]
pub struct Cli {
    /// First integer scanned [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last integer scanned, inclusive [default: 1000000]
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Timed repetitions per strategy [default: 5]
    #[arg(long, short = 'n')]
    pub runs: Option<usize>,

    /// Parallel worker count [default: available hardware concurrency]
    #[arg(long, short = 'w')]
    pub workers: Option<usize>,

    /// Maximum wait for the parallel pool to finish (e.g. "60s", "500ms")
    #[arg(long)]
    pub join_timeout: Option<String>,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save the JSON report as a baseline
    /// Optionally specify a path; defaults to config or target/primebench/baseline.json
    #[arg(long)]
    pub save_baseline: Option<Option<PathBuf>>,

    /// Configuration file (skips primebench.toml discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the PrimeBench CLI with process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the PrimeBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::discover()?.unwrap_or_default(),
    };

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()
        .map_err(ConfigError::Format)?;

    let driver_config = build_driver_config(&cli, &config)?;
    let report = run_benchmark(&driver_config)?;

    let output = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    save_baseline_if_needed(&cli, &config, &report)?;

    Ok(())
}

/// Execute the benchmark described by `config` and build its report.
///
/// Any scan failure aborts the run before a report exists.
pub fn run_benchmark(config: &DriverConfig) -> anyhow::Result<Report> {
    let driver = BenchmarkDriver::new(config)?;
    let outcome = driver.run()?;
    let stats = compute_statistics(&outcome);
    Ok(build_report(&outcome, &stats))
}

/// Build a DriverConfig by layering: primebench.toml values → CLI overrides.
pub fn build_driver_config(cli: &Cli, config: &BenchConfig) -> Result<DriverConfig, ConfigError> {
    let start = cli.start.unwrap_or(config.range.start);
    let end = cli.end.unwrap_or(config.range.end);
    if start > end {
        return Err(ConfigError::InvalidRange { start, end });
    }

    let runs = cli.runs.unwrap_or(config.runner.runs);
    if runs == 0 {
        return Err(ConfigError::Zero { field: "runs" });
    }

    let workers = cli
        .workers
        .or(config.runner.workers)
        .unwrap_or_else(default_workers);
    if workers == 0 {
        return Err(ConfigError::Zero { field: "workers" });
    }

    let join_timeout = BenchConfig::parse_duration(
        cli.join_timeout
            .as_deref()
            .unwrap_or(config.runner.join_timeout.as_str()),
    )?;

    Ok(DriverConfig {
        start,
        end,
        runs,
        workers,
        join_timeout,
        show_progress: !cli.no_progress,
    })
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "primebench=debug,primebench_core=debug,primebench_cli=debug"
    } else {
        "primebench=info,primebench_core=info,primebench_cli=info"
    };

    // Already installed when the harness runs more than once in a process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Save the report as a baseline JSON file if configured.
fn save_baseline_if_needed(cli: &Cli, config: &BenchConfig, report: &Report) -> anyhow::Result<()> {
    let should_save = cli.save_baseline.is_some() || config.output.save_baseline;
    if !should_save {
        return Ok(());
    }

    // Resolve path: CLI value > config value > default
    let path = cli
        .save_baseline
        .as_ref()
        .and_then(|opt| opt.clone())
        .or_else(|| config.output.baseline_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASELINE_PATH));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = generate_json_report(report)?;
    std::fs::write(&path, json)?;
    eprintln!("Baseline saved to: {}", path.display());

    Ok(())
}
