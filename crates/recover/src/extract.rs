//! Balanced extraction of the first complete top-level JSON object from a
//! blob of surrounding prose.

use crate::scan::ScanState;

/// Return the substring spanning the first complete top-level `{...}`
/// object in `text`, or `None` if no balanced object exists.
///
/// Brace depth is tracked with [`ScanState`] so braces inside string
/// literals are ignored. The depth counter is signed: a stray `}` before
/// the object drives it negative and the candidate is rejected. Only
/// object roots are handled here; array-rooted payloads are picked up by a
/// later recovery strategy. No repair is attempted: text that ends with
/// unclosed braces yields `None`.
pub fn extract_balanced_object(text: &str) -> Option<&str> {
    let mut state = ScanState::Normal;
    let mut depth: i64 = 0;
    let mut start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        if state == ScanState::Normal {
            match ch {
                '{' => {
                    if depth == 0 {
                        start = Some(i);
                    }
                    depth += 1;
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(s) = start {
                            return Some(&text[s..i + ch.len_utf8()]);
                        }
                    }
                }
                _ => {}
            }
        }
        state = state.step(ch);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_object_surrounded_by_prose() {
        let text = "Sure, here you go: {\"x\": 1} Hope that helps!";
        assert_eq!(extract_balanced_object(text), Some("{\"x\": 1}"));
    }

    #[test]
    fn test_ignores_brace_inside_string() {
        let text = "{\"note\": \"use } carefully\", \"x\": 1}";
        assert_eq!(extract_balanced_object(text), Some(text));
    }

    #[test]
    fn test_nested_objects() {
        let text = "prefix {\"a\": {\"b\": 2}} suffix {\"c\": 3}";
        assert_eq!(extract_balanced_object(text), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn test_unterminated_object_is_not_found() {
        assert_eq!(extract_balanced_object("{\"a\": 1"), None);
    }

    #[test]
    fn test_no_object_at_all() {
        assert_eq!(extract_balanced_object("just words"), None);
        assert_eq!(extract_balanced_object("[1, 2, 3]"), None);
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let text = "{\"a\": \"she said \\\"}\\\"\", \"b\": 2}";
        assert_eq!(extract_balanced_object(text), Some(text));
    }

    #[test]
    fn test_stray_closer_unbalances_the_scan() {
        // The counter goes negative before the object opens, so the first
        // `{` is never recorded at depth zero.
        assert_eq!(extract_balanced_object("} noise {\"x\": 1}"), None);
    }
}
