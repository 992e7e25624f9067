//! Error types for loading, comparing and emitting benchmark reports.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a benchmark report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The benchmark results file does not exist.
    #[error("Benchmark file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// The benchmark results file exists but could not be read.
    #[error("Failed to read benchmark file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The benchmark results file is not valid JSON.
    #[error("Invalid JSON in {}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document is JSON but has no usable `results` array.
    #[error("Unexpected benchmark file layout in {}", .path.display())]
    InvalidShape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Fewer result entries than the comparison needs.
    #[error("Missing result entry at index {index}: file contains {found} result(s)")]
    MissingEntry { index: usize, found: usize },

    /// A result entry lacks a numeric `mean` or has malformed `max_rss` samples.
    #[error("Invalid result entry at index {index}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The output record could not be serialized.
    #[error("Failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    /// The report could not be written to disk.
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    /// Whether the failure happened while loading or interpreting the input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput { .. }
                | Self::Read { .. }
                | Self::InvalidJson { .. }
                | Self::InvalidShape { .. }
                | Self::MissingEntry { .. }
                | Self::InvalidEntry { .. }
        )
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
