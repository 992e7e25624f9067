//! Markdown output generation for benchmark reports.
//!
//! This module renders an [`OutputRecord`] as a short markdown summary
//! suitable for posting as a pull request comment.

use crate::record::OutputRecord;
use std::fmt::Write;

const NOT_AVAILABLE: &str = "N/A";

/// Generate a markdown summary from a report record.
pub fn generate_summary(record: &OutputRecord) -> String {
    let mut output = String::new();
    let pr = &record.pr;
    let metrics = &record.metrics;

    writeln!(output, "## Benchmark: [#{} {}]({})", pr.number, pr.title, pr.url).unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Commit `{}` · generated {}",
        pr.short_commit(),
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Metric | PR | master | Delta | Change |").unwrap();
    writeln!(output, "|--------|----|--------|-------|--------|").unwrap();
    writeln!(
        output,
        "| Mean time | {:.3} s | {:.3} s | {:+.3} s | {} |",
        metrics.pr_time, metrics.master_time, metrics.time_diff, metrics.time_pct
    )
    .unwrap();
    writeln!(
        output,
        "| Avg peak memory | {} | {} | {} | {} |",
        format_memory(metrics.pr_memory),
        format_memory(metrics.master_memory),
        metrics
            .memory_diff
            .map(|diff| format!("{diff:+.1} MB"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        metrics.memory_pct.as_deref().unwrap_or(NOT_AVAILABLE)
    )
    .unwrap();

    output
}

fn format_memory(value: Option<f64>) -> String {
    match value {
        Some(mb) => format!("{mb:.1} MB"),
        None => NOT_AVAILABLE.to_string(),
    }
}
