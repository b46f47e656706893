//! Field-level merge of patch content into an existing node.

use serde_json::Value;

use crate::types::UPDATED_KEY;

/// Merge `source` into `target`, returning the merged value and whether
/// anything structurally changed.
///
/// When both sides are objects the result starts from a copy of `target`
/// and overlays each `source` key: inserting a new key or overwriting one
/// whose value differs (deep equality) marks the merge changed. The
/// reserved `isUpdated` key is always ignored on the source side, and keys
/// present only in `target` are never deleted.
///
/// When either side is not an object the source wins wholesale and the
/// merge is changed iff the two values differ.
pub fn merge(target: &Value, source: &Value) -> (Value, bool) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            let mut merged = target_map.clone();
            let mut changed = false;
            for (key, value) in source_map {
                if key == UPDATED_KEY {
                    continue;
                }
                if target_map.get(key) != Some(value) {
                    changed = true;
                }
                merged.insert(key.clone(), value.clone());
            }
            (Value::Object(merged), changed)
        }
        _ => (source.clone(), target != source),
    }
}
