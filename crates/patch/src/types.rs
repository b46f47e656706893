//! Core types for the patch-merge engine.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Reserved, engine-owned key marking an object node changed by the most
/// recent patch merge. Never accepted from patch content; serialized as an
/// ordinary sibling key.
pub const UPDATED_KEY: &str = "isUpdated";

/// A targeted replacement: `content` is merged into the node addressed by
/// `path`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Patch {
    pub path: String,
    pub content: Value,
}

impl Patch {
    pub fn new(path: impl Into<String>, content: Value) -> Self {
        Patch {
            path: path.into(),
            content,
        }
    }
}

/// Why a single patch was skipped. Skips are logged, never propagated:
/// patch application is total over the batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchSkip {
    #[error("path did not match the patch grammar")]
    UnrecognizedPath,
    #[error("path index out of range or node missing")]
    Unresolved,
    #[error("patch content is null")]
    MissingContent,
}

/// Decode the patch envelope a second model call produces: an object with
/// a `patches` array of `{path, content}` entries.
///
/// A missing or non-array `patches` field yields an empty list. Entries
/// that are not objects, have an empty or missing `path`, or have missing
/// or null `content` are dropped here; index validity is checked later
/// against the document being patched.
pub fn patches_from_value(envelope: &Value) -> Vec<Patch> {
    let Some(entries) = envelope.get("patches").and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let path = entry.get("path")?.as_str()?;
            if path.is_empty() {
                return None;
            }
            let content = entry.get("content")?;
            if content.is_null() {
                return None;
            }
            Some(Patch::new(path, content.clone()))
        })
        .collect()
}
