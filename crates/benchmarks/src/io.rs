//! I/O operations for benchmark reports.
//!
//! This module loads benchmark-results files from disk and writes
//! finished reports back to the filesystem.

use crate::error::{ReportError, Result};
use crate::result::BenchmarkResults;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read and parse a benchmark-results file.
///
/// # Errors
///
/// Returns [`ReportError::MissingInput`] if `path` does not exist,
/// [`ReportError::Read`] if it cannot be read, and
/// [`ReportError::InvalidJson`] / [`ReportError::InvalidShape`] if the
/// content is not a JSON document with a `results` array.
pub fn read_results_json(path: impl AsRef<Path>) -> Result<BenchmarkResults> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReportError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let results = parse_results(path, &content)?;

    debug!(path = %path.display(), entries = results.len(), "Loaded benchmark results");
    Ok(results)
}

fn parse_results(path: &Path, content: &str) -> Result<BenchmarkResults> {
    serde_json::from_str(content).map_err(|source| {
        let path = path.to_path_buf();
        if source.is_data() {
            ReportError::InvalidShape { path, source }
        } else {
            ReportError::InvalidJson { path, source }
        }
    })
}

/// Resolve an output path against the current working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_output_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

/// Write report text to `path`, replacing any existing content.
pub fn write_report(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_results_json(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ReportError::MissingInput { .. }));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.json");
        fs::write(&path, "{ \"results\": [").unwrap();
        let err = read_results_json(&path).unwrap_err();
        assert!(matches!(err, ReportError::InvalidJson { .. }));
    }

    #[test]
    fn test_read_json_without_results() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.json");
        fs::write(&path, r#"{ "runs": [] }"#).unwrap();
        let err = read_results_json(&path).unwrap_err();
        assert!(matches!(err, ReportError::InvalidShape { .. }));
    }

    #[test]
    fn test_read_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.json");
        fs::write(
            &path,
            r#"{ "results": [ { "command": "a", "mean": 1.1 }, { "command": "b", "mean": 1.0 } ] }"#,
        )
        .unwrap();
        let results = read_results_json(&path).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results.candidate().unwrap().mean, 1.1);
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale content that is much longer than the replacement").unwrap();
        write_report(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_report_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_report(&path, "{}").unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }

    #[test]
    fn test_resolve_output_path() {
        let dir = tempdir().unwrap();
        let absolute = dir.path().join("out.json");
        assert_eq!(resolve_output_path(&absolute).unwrap(), absolute);

        let relative = resolve_output_path("reports/out.json").unwrap();
        assert!(relative.is_absolute());
        assert!(relative.ends_with("reports/out.json"));
    }
}
