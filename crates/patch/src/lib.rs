//! Path-addressed patch merging with change tracking.
//!
//! A refinement model call returns a small set of `{path, content}`
//! patches addressing nodes of a previously recovered document. This crate
//! parses those paths, merges each patch field-by-field into a deep copy
//! of the document, and marks every structurally changed object node with
//! the engine-owned `isUpdated` key. Defective patches are skipped in
//! isolation; application never fails.
//!
//! # Example
//!
//! ```
//! use reconcile_patch::{apply_patches, Patch};
//! use serde_json::json;
//!
//! let doc = json!({"sessions": [{"timeline": [{"activity": "lecture"}]}]});
//! let patches = [Patch::new(
//!     "sessions[0].timeline[0]",
//!     json!({"activity": "hands-on experiment"}),
//! )];
//! let updated = apply_patches(&doc, &patches);
//! assert_eq!(updated["sessions"][0]["timeline"][0]["isUpdated"], true);
//! ```

pub mod apply;
pub mod merge;
pub mod path;
pub mod types;

pub use apply::apply_patches;
pub use merge::merge;
pub use path::{resolve, resolve_mut, PatchPath};
pub use types::{patches_from_value, Patch, PatchSkip, UPDATED_KEY};
