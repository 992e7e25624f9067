//! CLI for bench-tracker.
//!
//! This crate provides the command-line interface that turns a
//! benchmark-results file into a normalized JSON comparison record.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use bench_tracker_benchmarks::{generate_report, io, markdown, OutputRecord, PrIdentity};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// bench-tracker CLI.
///
/// Compares the first result set (PR) against the second (master) and
/// prints the comparison record as JSON.
#[derive(Parser, Debug)]
#[command(name = "bench-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Benchmark results file produced by the benchmarking tool.
    pub benchmark_file: PathBuf,

    /// Pull request number.
    pub pr_number: u64,

    /// Pull request title.
    #[arg(allow_hyphen_values = true)]
    pub pr_title: String,

    /// Pull request URL.
    pub pr_url: String,

    /// Commit SHA the PR run was built from.
    pub commit_sha: String,

    /// Also write the JSON record to this file, replacing its contents.
    pub output: Option<PathBuf>,

    /// Write a markdown summary to this file.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,

    /// Log filter for stderr output (e.g. "debug", "bench_tracker_benchmarks=trace").
    #[arg(long, default_value = "warn", value_parser = parse_log_filter)]
    pub log_level: String,
}

impl Cli {
    /// The PR identity carried by the positional arguments.
    pub fn pr_identity(&self) -> PrIdentity {
        PrIdentity::new(
            self.pr_number,
            self.pr_title.clone(),
            self.pr_url.clone(),
            self.commit_sha.clone(),
        )
    }
}

fn parse_log_filter(value: &str) -> Result<String, String> {
    EnvFilter::try_new(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid log filter: {e}"))
}

/// Install the stderr log subscriber.
///
/// Colour is only used when stderr is a terminal. Falls back to `warn`
/// (and says so) if `level` is not a valid filter directive.
pub fn init_logging(level: &str) {
    let (filter, rejected) = match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("warn"), Some(e)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    if let Some(e) = rejected {
        warn!(filter = level, error = %e, "Invalid log filter, using \"warn\"");
    }
}

/// Run the CLI with the current time as the record timestamp.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    run_at(cli, Utc::now())
}

/// Run the CLI, stamping the record with `timestamp`.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if loading, comparing or
/// writing fails. Nothing is printed to stdout when loading fails.
pub fn run_at(cli: &Cli, timestamp: DateTime<Utc>) -> anyhow::Result<()> {
    let record = generate_report(&cli.benchmark_file, cli.pr_identity(), timestamp)
        .context("Failed to process benchmark results")?;
    let json = record.to_json(cli.compact)?;

    println!("{json}");

    if let Some(output) = &cli.output {
        let path = io::resolve_output_path(output)?;
        io::write_report(&path, &json)?;
        println!("Results written to {}", path.display());
    }

    if let Some(summary) = &cli.summary {
        write_summary(&record, summary)?;
    }

    Ok(())
}

fn write_summary(record: &OutputRecord, summary: &Path) -> anyhow::Result<()> {
    let path = io::resolve_output_path(summary)?;
    io::write_report(&path, &markdown::generate_summary(record))
        .context("Failed to write markdown summary")?;
    println!("Summary written to {}", path.display());
    Ok(())
}
