//! Comparison metrics between a candidate and a baseline run set.
//!
//! All values are kept as numbers until the output boundary; only the
//! percentage fields are rendered as text (`"12.34%"`) because they are
//! meant for display.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::result::ResultEntry;

/// Kilobytes per megabyte, for converting `max_rss` samples.
pub const KB_PER_MB: f64 = 1024.0;

/// Computed comparison metrics.
///
/// `None` marks an unavailable value and serializes as `null`; it is
/// never collapsed to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Candidate mean time in seconds.
    pub pr_time: f64,
    /// Baseline mean time in seconds.
    pub master_time: f64,
    /// Candidate average peak memory in megabytes.
    pub pr_memory: Option<f64>,
    /// Baseline average peak memory in megabytes.
    pub master_memory: Option<f64>,
    /// `pr_time - master_time`, rounded to 3 decimals.
    pub time_diff: f64,
    /// Relative time change, e.g. `"23.40%"`.
    pub time_pct: String,
    /// `pr_memory - master_memory`, rounded to 3 decimals.
    pub memory_diff: Option<f64>,
    /// Relative memory change, e.g. `"-5.00%"`.
    pub memory_pct: Option<String>,
}

impl Metrics {
    /// Compare a candidate entry against a baseline entry.
    pub fn compare(candidate: &ResultEntry, baseline: &ResultEntry) -> Self {
        let pr_memory = average_memory_mb(candidate);
        let master_memory = average_memory_mb(baseline);

        if pr_memory.is_none() || master_memory.is_none() {
            warn!(
                pr_memory_present = pr_memory.is_some(),
                master_memory_present = master_memory.is_some(),
                "Memory samples missing, memory delta unavailable"
            );
        }

        let time_ratio = percent_change(candidate.mean, baseline.mean);
        if !time_ratio.is_finite() {
            warn!(
                master_time = baseline.mean,
                "Baseline mean is zero or invalid, time percentage is not finite"
            );
        }

        let (memory_diff, memory_pct) = match (pr_memory, master_memory) {
            (Some(pr), Some(master)) => (
                Some(round_to(pr - master, 3)),
                Some(format_percent(percent_change(pr, master))),
            ),
            _ => (None, None),
        };

        let metrics = Self {
            pr_time: candidate.mean,
            master_time: baseline.mean,
            pr_memory,
            master_memory,
            time_diff: round_to(candidate.mean - baseline.mean, 3),
            time_pct: format_percent(time_ratio),
            memory_diff,
            memory_pct,
        };
        debug!(?metrics, "Computed comparison metrics");
        metrics
    }
}

/// Average of the entry's `max_rss` samples in megabytes, rounded to 1 decimal.
pub fn average_memory_mb(entry: &ResultEntry) -> Option<f64> {
    let samples = entry.memory_samples()?;
    let mean_kb = samples.iter().sum::<f64>() / samples.len() as f64;
    Some(round_to(mean_kb / KB_PER_MB, 1))
}

/// `(current / reference - 1) * 100`. Non-finite when `reference` is zero.
pub fn percent_change(current: f64, reference: f64) -> f64 {
    (current / reference - 1.0) * 100.0
}

/// Render a percentage with 2 decimals and a trailing `%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Round to `decimals` places by rendering the exact binary value as
/// decimal text, so `1.0005` (stored just below the tie) becomes `1.0`.
///
/// Negative zero is normalized to `0.0`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}")
        .parse::<f64>()
        .map(|rounded| rounded + 0.0)
        .unwrap_or(value)
}
