//! Benchmark result types.
//!
//! This module provides the input model read from a benchmark-results
//! file (the JSON export of an external benchmarking tool such as
//! hyperfine). Only the first two entries of `results` are ever
//! interpreted: index 0 is the candidate (PR) run set, index 1 the
//! baseline (master) run set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReportError, Result};

/// Index of the candidate (PR) entry.
pub const CANDIDATE_INDEX: usize = 0;

/// Index of the baseline (master) entry.
pub const BASELINE_INDEX: usize = 1;

/// Parsed benchmark-results document.
///
/// Entries are kept as raw JSON so that entries past the baseline are
/// never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResults {
    /// Result sets in the order the benchmarking tool emitted them.
    pub results: Vec<Value>,
}

impl BenchmarkResults {
    /// Number of result sets in the document.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the document holds no result sets.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Decode the entry at `index`.
    pub fn entry(&self, index: usize) -> Result<ResultEntry> {
        let raw = self.results.get(index).ok_or(ReportError::MissingEntry {
            index,
            found: self.results.len(),
        })?;
        ResultEntry::deserialize(raw).map_err(|source| ReportError::InvalidEntry { index, source })
    }

    /// The candidate (PR) entry.
    pub fn candidate(&self) -> Result<ResultEntry> {
        self.entry(CANDIDATE_INDEX)
    }

    /// The baseline (master) entry.
    pub fn baseline(&self) -> Result<ResultEntry> {
        self.entry(BASELINE_INDEX)
    }
}

/// One benchmarked run set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Mean wall-clock time in seconds.
    pub mean: f64,
    /// Peak resident memory per run, in kilobytes.
    pub max_rss: Option<Vec<f64>>,
}

impl ResultEntry {
    /// Create an entry with no memory samples.
    pub fn new(mean: f64) -> Self {
        Self {
            mean,
            max_rss: None,
        }
    }

    /// Attach peak memory samples.
    pub fn with_max_rss(mut self, samples: Vec<f64>) -> Self {
        self.max_rss = Some(samples);
        self
    }

    /// Memory samples, if any were recorded.
    pub fn memory_samples(&self) -> Option<&[f64]> {
        match self.max_rss.as_deref() {
            Some(samples) if !samples.is_empty() => Some(samples),
            _ => None,
        }
    }
}
