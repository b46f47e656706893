//! Multi-strategy JSON recovery for generative-model output.
//!
//! Language models asked to emit JSON routinely wrap it in prose or
//! markdown fences, leave trailing commas, drop raw LaTeX backslashes into
//! string values, or get cut off mid-structure by output-length limits.
//! This crate turns such text back into a [`serde_json::Value`] through an
//! ordered chain of recovery strategies, or fails terminally after dumping
//! the raw response through an injectable diagnostics sink.
//!
//! # Example
//!
//! ```
//! use reconcile_recover::{parse_model_output, NullSink};
//!
//! let raw = "Here is your plan:\n```json\n{\"title\": \"Optics\",}\n```";
//! let value = parse_model_output(raw, &NullSink).unwrap();
//! assert_eq!(value["title"], "Optics");
//! ```

pub mod diagnostics;
pub mod extract;
pub mod normalize;
pub mod parse;
pub mod repair;
pub mod scan;

pub use diagnostics::{DiagnosticsSink, FileSink, NullSink, DEFAULT_DUMP_FILE};
pub use extract::extract_balanced_object;
pub use normalize::normalize_common_issues;
pub use parse::{parse_model_output, RecoverError};
pub use repair::repair_truncated;
pub use scan::ScanState;
