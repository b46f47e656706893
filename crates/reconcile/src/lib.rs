//! Resilient structured-output reconciliation.
//!
//! Two stages over generative-model text:
//!
//! 1. **Recovery** — [`parse_model_output`] turns raw, routinely corrupted
//!    model output (prose wrapping, markdown fences, trailing commas,
//!    stray backslashes, truncation) into a [`serde_json::Value`].
//! 2. **Refinement** — [`apply_patches`] merges path-addressed patches
//!    from a second model call into the recovered document, flagging
//!    changed nodes with `isUpdated`.
//!
//! [`refine`] composes both: parse the refinement response, decode its
//! patch envelope, and apply it.

pub use reconcile_patch::{
    apply_patches, merge, patches_from_value, Patch, PatchPath, PatchSkip, UPDATED_KEY,
};
pub use reconcile_recover::{
    parse_model_output, DiagnosticsSink, FileSink, NullSink, RecoverError, DEFAULT_DUMP_FILE,
};

use serde_json::Value;

/// Parse the raw refinement response through the full recovery pipeline,
/// decode its `patches` envelope, and apply the patches to a copy of
/// `document`.
///
/// Fails only when the refinement text itself defeats every recovery
/// strategy; a well-formed response with unusable patches still returns a
/// document (unchanged where patches were skipped).
pub fn refine(
    document: &Value,
    raw_patch_text: &str,
    sink: &dyn DiagnosticsSink,
) -> Result<Value, RecoverError> {
    let envelope = parse_model_output(raw_patch_text, sink)?;
    let patches = patches_from_value(&envelope);
    Ok(apply_patches(document, &patches))
}
