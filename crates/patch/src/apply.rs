//! Batch application of patches to a document copy.

use serde_json::Value;

use crate::merge::merge;
use crate::path::{resolve_mut, PatchPath};
use crate::types::{Patch, PatchSkip, UPDATED_KEY};

/// Apply `patches` to a deep copy of `document`, strictly in list order
/// (last write wins on path collisions), and return the merged result.
///
/// Any patch that cannot be processed — unrecognized path, index outside
/// the document, null content — is skipped and logged; a skip never aborts
/// the batch and never touches the addressed node. The input document is
/// never mutated.
pub fn apply_patches(document: &Value, patches: &[Patch]) -> Value {
    let mut doc = document.clone();
    for patch in patches {
        match apply_one(&mut doc, patch) {
            Ok(()) => tracing::debug!(path = %patch.path, "patch applied"),
            Err(skip) => tracing::debug!(path = %patch.path, reason = %skip, "patch skipped"),
        }
    }
    doc
}

fn apply_one(doc: &mut Value, patch: &Patch) -> Result<(), PatchSkip> {
    if patch.content.is_null() {
        return Err(PatchSkip::MissingContent);
    }
    let path = PatchPath::parse(&patch.path).ok_or(PatchSkip::UnrecognizedPath)?;

    if path == PatchPath::Header {
        return apply_header(doc, &patch.content);
    }

    let node = resolve_mut(doc, &path).ok_or(PatchSkip::Unresolved)?;
    let (mut merged, changed) = merge(node, &patch.content);
    if changed {
        if let Some(map) = merged.as_object_mut() {
            map.insert(UPDATED_KEY.to_string(), Value::Bool(true));
        }
    }
    *node = merged;
    Ok(())
}

/// The `header` path is special-cased: only `title` and
/// `learningObjectives` are considered, each overwritten only when present
/// in the content and different from the current value, and no change flag
/// is set. The asymmetry with every other path is deliberate and
/// preserved.
fn apply_header(doc: &mut Value, content: &Value) -> Result<(), PatchSkip> {
    let Some(fields) = content.as_object() else {
        return Err(PatchSkip::Unresolved);
    };
    let Some(root) = doc.as_object_mut() else {
        return Err(PatchSkip::Unresolved);
    };
    for key in ["title", "learningObjectives"] {
        if let Some(value) = fields.get(key) {
            if root.get(key) != Some(value) {
                root.insert(key.to_string(), value.clone());
            }
        }
    }
    Ok(())
}
