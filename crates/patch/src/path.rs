//! The patch path grammar and its resolution against a document.
//!
//! Paths address a small, fixed set of locations in a lesson-plan shaped
//! document. Anything outside the grammar, and any index that falls
//! outside the current document, resolves to "unresolved" — a signal to
//! skip the patch, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// A parsed patch path.
///
/// Grammar (ASCII, case-sensitive):
/// `header` | `sessions[<uint>]` | `sessions[<uint>].timeline[<uint>]` |
/// `sessions[<uint>].homework` | `discussionQuestions[<uint>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchPath {
    /// Virtual alias for the document's top-level title/objectives fields.
    Header,
    Session(usize),
    Timeline { session: usize, step: usize },
    Homework { session: usize },
    DiscussionQuestion(usize),
}

static SESSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sessions\[(\d+)\]$").expect("static pattern"));
static TIMELINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sessions\[(\d+)\]\.timeline\[(\d+)\]$").expect("static pattern"));
static HOMEWORK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sessions\[(\d+)\]\.homework$").expect("static pattern"));
static DISCUSSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^discussionQuestions\[(\d+)\]$").expect("static pattern"));

impl PatchPath {
    /// Parse a path string. Returns `None` for anything outside the
    /// grammar, including trailing garbage after an otherwise valid form.
    pub fn parse(path: &str) -> Option<PatchPath> {
        if path == "header" {
            return Some(PatchPath::Header);
        }
        if let Some(caps) = TIMELINE_RE.captures(path) {
            return Some(PatchPath::Timeline {
                session: caps[1].parse().ok()?,
                step: caps[2].parse().ok()?,
            });
        }
        if let Some(caps) = HOMEWORK_RE.captures(path) {
            return Some(PatchPath::Homework {
                session: caps[1].parse().ok()?,
            });
        }
        if let Some(caps) = SESSION_RE.captures(path) {
            return Some(PatchPath::Session(caps[1].parse().ok()?));
        }
        if let Some(caps) = DISCUSSION_RE.captures(path) {
            return Some(PatchPath::DiscussionQuestion(caps[1].parse().ok()?));
        }
        None
    }
}

fn session<'a>(doc: &'a Value, idx: usize) -> Option<&'a Value> {
    doc.get("sessions")?.as_array()?.get(idx)
}

fn session_mut<'a>(doc: &'a mut Value, idx: usize) -> Option<&'a mut Value> {
    doc.get_mut("sessions")?.as_array_mut()?.get_mut(idx)
}

/// Resolve a parsed path to the node it addresses, or `None` when the
/// document does not contain that node. `Header` has no single node of
/// its own and always resolves to `None`; the orchestrator special-cases
/// it before resolution.
pub fn resolve<'a>(doc: &'a Value, path: &PatchPath) -> Option<&'a Value> {
    match *path {
        PatchPath::Header => None,
        PatchPath::Session(idx) => session(doc, idx),
        PatchPath::Timeline { session: s, step } => {
            session(doc, s)?.get("timeline")?.as_array()?.get(step)
        }
        PatchPath::Homework { session: s } => session(doc, s)?.get("homework"),
        PatchPath::DiscussionQuestion(idx) => {
            doc.get("discussionQuestions")?.as_array()?.get(idx)
        }
    }
}

/// Mutable counterpart of [`resolve`], used when applying a merge result.
pub fn resolve_mut<'a>(doc: &'a mut Value, path: &PatchPath) -> Option<&'a mut Value> {
    match *path {
        PatchPath::Header => None,
        PatchPath::Session(idx) => session_mut(doc, idx),
        PatchPath::Timeline { session: s, step } => session_mut(doc, s)?
            .get_mut("timeline")?
            .as_array_mut()?
            .get_mut(step),
        PatchPath::Homework { session: s } => session_mut(doc, s)?.get_mut("homework"),
        PatchPath::DiscussionQuestion(idx) => {
            doc.get_mut("discussionQuestions")?.as_array_mut()?.get_mut(idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_every_grammar_form() {
        assert_eq!(PatchPath::parse("header"), Some(PatchPath::Header));
        assert_eq!(PatchPath::parse("sessions[0]"), Some(PatchPath::Session(0)));
        assert_eq!(
            PatchPath::parse("sessions[2].timeline[11]"),
            Some(PatchPath::Timeline { session: 2, step: 11 })
        );
        assert_eq!(
            PatchPath::parse("sessions[1].homework"),
            Some(PatchPath::Homework { session: 1 })
        );
        assert_eq!(
            PatchPath::parse("discussionQuestions[3]"),
            Some(PatchPath::DiscussionQuestion(3))
        );
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        for bad in [
            "",
            "Header",
            "header ",
            "sessions",
            "sessions[]",
            "sessions[-1]",
            "sessions[0",
            "sessions[0].notes",
            "sessions[0].timeline",
            "sessions[0].timeline[1]x",
            "sessions[0]junk.timeline[1]",
            "discussionquestions[0]",
            "title",
        ] {
            assert_eq!(PatchPath::parse(bad), None, "{bad:?} should not parse");
        }
    }

    fn plan() -> Value {
        json!({
            "title": "Optics",
            "sessions": [
                {"timeline": [{"activity": "lecture"}], "homework": {"due": "Monday"}},
                {"timeline": []}
            ],
            "discussionQuestions": [{"question": "Why?"}]
        })
    }

    #[test]
    fn test_resolve_in_range() {
        let doc = plan();
        assert_eq!(
            resolve(&doc, &PatchPath::Timeline { session: 0, step: 0 }),
            Some(&json!({"activity": "lecture"}))
        );
        assert_eq!(
            resolve(&doc, &PatchPath::Homework { session: 0 }),
            Some(&json!({"due": "Monday"}))
        );
        assert_eq!(
            resolve(&doc, &PatchPath::DiscussionQuestion(0)),
            Some(&json!({"question": "Why?"}))
        );
    }

    #[test]
    fn test_resolve_out_of_range_or_missing() {
        let doc = plan();
        assert_eq!(resolve(&doc, &PatchPath::Session(9)), None);
        assert_eq!(
            resolve(&doc, &PatchPath::Timeline { session: 1, step: 0 }),
            None
        );
        // Session 1 has no homework key at all.
        assert_eq!(resolve(&doc, &PatchPath::Homework { session: 1 }), None);
        assert_eq!(resolve(&doc, &PatchPath::DiscussionQuestion(5)), None);
        // A document missing the whole field is fine too.
        assert_eq!(resolve(&json!({}), &PatchPath::Session(0)), None);
    }
}
