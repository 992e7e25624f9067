//! Benchmark comparison reports for bench-tracker.
//!
//! This crate reads the results file produced by an external benchmarking
//! tool, compares the candidate (PR) run set against the baseline (master)
//! run set, and builds a normalized record for historical tracking.
//!
//! # Quick Start
//!
//! ```no_run
//! use bench_tracker_benchmarks::{generate_report, PrIdentity};
//! use chrono::Utc;
//!
//! let pr = PrIdentity::new(42, "Speed up parser", "https://example.test/pull/42", "abc1234");
//! let record = generate_report("bench.json", pr, Utc::now())?;
//! println!("{}", record.to_json(false)?);
//! # Ok::<(), bench_tracker_benchmarks::ReportError>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - Input model of the benchmark-results file
//! - [`metrics`] - Candidate vs. baseline metrics
//! - [`record`] - The emitted `OutputRecord`
//! - [`io`] - Loading results and writing reports
//! - [`markdown`] - Markdown summary generation
//! - [`error`] - Error types

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod io;
pub mod markdown;
pub mod metrics;
pub mod record;
pub mod result;

pub use error::{ReportError, Result};
pub use metrics::Metrics;
pub use record::{OutputRecord, PrIdentity};
pub use result::{BenchmarkResults, ResultEntry};

use chrono::{DateTime, Utc};
use std::path::Path;

/// Load a benchmark-results file and build the report record.
///
/// This is the load-and-compute half of the pipeline; nothing is
/// written anywhere.
///
/// # Errors
///
/// Returns a [`ReportError`] if the file is missing, unreadable, not
/// JSON, or lacks the two result entries being compared.
pub fn generate_report(
    input: impl AsRef<Path>,
    pr: PrIdentity,
    timestamp: DateTime<Utc>,
) -> Result<OutputRecord> {
    let results = io::read_results_json(input)?;
    OutputRecord::build(&results, pr, timestamp)
}
