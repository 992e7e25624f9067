//! Normalized output record for historical tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metrics::Metrics;
use crate::result::BenchmarkResults;

/// Pull request the benchmark was run for. Passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrIdentity {
    /// Pull request number.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Pull request URL.
    pub url: String,
    /// Commit the candidate run was built from.
    pub commit: String,
}

impl PrIdentity {
    /// Create a new PR identity.
    pub fn new(
        number: u64,
        title: impl Into<String>,
        url: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            url: url.into(),
            commit: commit.into(),
        }
    }

    /// First seven characters of the commit, for display.
    pub fn short_commit(&self) -> &str {
        match self.commit.char_indices().nth(7) {
            Some((end, _)) => &self.commit[..end],
            None => &self.commit,
        }
    }
}

/// The emitted report record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// When the record was generated.
    pub timestamp: DateTime<Utc>,
    /// The pull request under test.
    pub pr: PrIdentity,
    /// Candidate vs. baseline metrics.
    pub metrics: Metrics,
}

impl OutputRecord {
    /// Assemble a record from its parts.
    pub fn new(pr: PrIdentity, metrics: Metrics, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            pr,
            metrics,
        }
    }

    /// Compare the candidate and baseline entries of `results` and
    /// build the record, stamped with `timestamp`.
    pub fn build(
        results: &BenchmarkResults,
        pr: PrIdentity,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let candidate = results.candidate()?;
        let baseline = results.baseline()?;
        let metrics = Metrics::compare(&candidate, &baseline);
        Ok(Self::new(pr, metrics, timestamp))
    }

    /// Serialize as JSON, 2-space indented unless `compact`.
    pub fn to_json(&self, compact: bool) -> Result<String> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }
}
