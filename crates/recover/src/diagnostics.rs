//! Diagnostics sink for terminal parse failures.
//!
//! When every recovery strategy fails, the orchestrator hands the original
//! unmodified model output to a sink so a human can inspect it later. The
//! sink is injectable; the default writes a fixed file, overwriting any
//! previous dump (last writer wins, best effort).

use std::fs;
use std::path::{Path, PathBuf};

/// Default file name for the failure dump, relative to the process working
/// directory.
pub const DEFAULT_DUMP_FILE: &str = "failed_response.txt";

/// Receives the raw model output when recovery is exhausted.
pub trait DiagnosticsSink {
    /// Record the raw text somewhere inspectable. Returns the location of
    /// the artifact, or `None` when nothing durable was written.
    fn record_failure(&self, raw: &str) -> Option<PathBuf>;
}

/// File-backed sink writing a single fixed dump file per failure.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSink {
    fn default() -> Self {
        FileSink::new(DEFAULT_DUMP_FILE)
    }
}

impl DiagnosticsSink for FileSink {
    fn record_failure(&self, raw: &str) -> Option<PathBuf> {
        match fs::write(&self.path, raw) {
            Ok(()) => Some(self.path.clone()),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to write diagnostic dump");
                None
            }
        }
    }
}

/// Sink that drops the text. Useful in tests and in callers that surface
/// failures through their own channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record_failure(&self, _raw: &str) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_overwrites_prior_dump() {
        let path = std::env::temp_dir().join("reconcile_recover_sink_test.txt");
        let sink = FileSink::new(&path);
        assert_eq!(sink.record_failure("first"), Some(path.clone()));
        assert_eq!(sink.record_failure("second"), Some(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_null_sink_reports_no_artifact() {
        assert_eq!(NullSink.record_failure("anything"), None);
    }
}
