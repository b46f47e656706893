//! The ordered fallback pipeline turning raw model output into a JSON
//! value.

use std::path::PathBuf;

use regex::RegexBuilder;
use serde_json::Value;
use thiserror::Error;

use crate::diagnostics::DiagnosticsSink;
use crate::extract::extract_balanced_object;
use crate::normalize::normalize_common_issues;
use crate::repair::repair_truncated;

/// Terminal failure: every recovery strategy was exhausted.
#[derive(Debug, Error, PartialEq)]
pub enum RecoverError {
    /// `artifact` is where the raw response was dumped for inspection, if
    /// the diagnostics sink produced one.
    #[error("unable to parse JSON from model output after trying all strategies")]
    Exhausted { artifact: Option<PathBuf> },
}

/// Parse free-form model output into a JSON value.
///
/// The text is cleaned once (control characters stripped, markdown fences
/// removed, common issues normalized) and then handed to four independent
/// strategies in order, short-circuiting on the first success:
///
/// 1. direct parse of the cleaned text;
/// 2. balanced extraction of the first complete `{...}` object;
/// 3. greedy regex span over the largest `{...}` or `[...]`;
/// 4. truncation repair, re-normalized, then parsed.
///
/// The returned root may be an Object or an Array; callers that require an
/// object-rooted document must check. On exhaustion the original,
/// unmodified `raw` text is written through `sink` and the failure carries
/// the artifact location.
pub fn parse_model_output(raw: &str, sink: &dyn DiagnosticsSink) -> Result<Value, RecoverError> {
    let stripped = strip_control_chars(raw);
    let unfenced = strip_markdown_fences(stripped.trim());
    let cleaned = normalize_common_issues(unfenced.trim());

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
        tracing::debug!(strategy = "direct", "model output parsed");
        return Ok(value);
    }

    if let Some(candidate) = extract_balanced_object(&cleaned) {
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            tracing::debug!(strategy = "balanced_extract", "model output parsed");
            return Ok(value);
        }
    }

    if let Some(candidate) = greedy_span(&cleaned) {
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            tracing::debug!(strategy = "greedy_span", "model output parsed");
            return Ok(value);
        }
    }

    let repaired = repair_truncated(&cleaned);
    if repaired != cleaned {
        let renormalized = normalize_common_issues(&repaired);
        if let Ok(value) = serde_json::from_str::<Value>(&renormalized) {
            tracing::debug!(strategy = "truncation_repair", "model output parsed");
            return Ok(value);
        }
    }

    let artifact = sink.record_failure(raw);
    tracing::warn!(artifact = ?artifact, "all recovery strategies exhausted");
    Err(RecoverError::Exhausted { artifact })
}

/// Drop C0 control characters except tab, newline, and carriage return.
fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|&ch| ch as u32 >= 32 || matches!(ch, '\n' | '\r' | '\t'))
        .collect()
}

/// Remove markdown code fences, with an optional `json` language tag.
fn strip_markdown_fences(text: &str) -> String {
    if !text.contains("```") {
        return text.to_string();
    }
    let open = RegexBuilder::new(r"```(?:json)?\s*")
        .build()
        .expect("static pattern");
    let close = RegexBuilder::new(r"\s*```").build().expect("static pattern");
    let opened = open.replace_all(text, "");
    close.replace_all(&opened, "").trim().to_string()
}

/// Greedily match the largest `{...}` or `[...]` span, dot matching
/// newlines.
fn greedy_span(text: &str) -> Option<&str> {
    let re = RegexBuilder::new(r"(\{.*\}|\[.*\])")
        .dot_matches_new_line(true)
        .build()
        .expect("static pattern");
    re.find(text).map(|m| m.as_str())
}
