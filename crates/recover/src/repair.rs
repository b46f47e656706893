//! Repair of truncated JSON by appending the missing closing tokens.

use crate::scan::ScanState;

/// Attempt to close structures left open by output-length truncation.
///
/// The whole text is scanned with [`ScanState`] counting net-open braces
/// and brackets, ignoring string contents. If neither count is positive
/// the text is returned unchanged: this repair only supplies missing
/// closers, never removes extra ones. Otherwise an unterminated string is
/// closed first, then all `]` and then all `}` are appended in that fixed
/// order. The closer ordering is a heuristic that holds for object-rooted
/// payloads whose outermost unclosed construct is a brace.
pub fn repair_truncated(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let mut state = ScanState::Normal;
    let mut braces: i64 = 0;
    let mut brackets: i64 = 0;

    for ch in text.chars() {
        if state == ScanState::Normal {
            match ch {
                '{' => braces += 1,
                '}' => braces -= 1,
                '[' => brackets += 1,
                ']' => brackets -= 1,
                _ => {}
            }
        }
        state = state.step(ch);
    }

    if braces <= 0 && brackets <= 0 {
        return text.to_string();
    }

    let mut repaired = String::with_capacity(text.len() + 8);
    repaired.push_str(text);
    if state.in_string() {
        repaired.push('"');
    }
    for _ in 0..brackets.max(0) {
        repaired.push(']');
    }
    for _ in 0..braces.max(0) {
        repaired.push('}');
    }
    repaired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_missing_braces_and_brackets() {
        assert_eq!(
            repair_truncated("{\"a\": [1, 2, 3], \"b\": {\"c\": 1"),
            "{\"a\": [1, 2, 3], \"b\": {\"c\": 1}}"
        );
    }

    #[test]
    fn test_balanced_text_unchanged() {
        let text = "{\"a\": 1}";
        assert_eq!(repair_truncated(text), text);
    }

    #[test]
    fn test_closes_string_first() {
        assert_eq!(
            repair_truncated("{\"a\": \"cut off"),
            "{\"a\": \"cut off\"}"
        );
    }

    #[test]
    fn test_brackets_close_before_braces() {
        assert_eq!(repair_truncated("{\"a\": [1, 2"), "{\"a\": [1, 2]}");
    }

    #[test]
    fn test_extra_closers_left_alone() {
        let text = "{\"a\": 1}}";
        assert_eq!(repair_truncated(text), text);
    }

    #[test]
    fn test_brace_inside_string_not_counted() {
        assert_eq!(
            repair_truncated("{\"note\": \"open { here\", \"x\": [1"),
            "{\"note\": \"open { here\", \"x\": [1]}"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(repair_truncated("   "), "");
    }
}
