//! Heuristic text fixups for the JSON defects models most commonly emit:
//! trailing commas and unescaped backslashes (LaTeX in string values).

use regex::Regex;

/// Characters that may legally follow a backslash in a JSON string.
const ESCAPE_FOLLOWERS: &[char] = &['\\', '"', '/', 'b', 'f', 'n', 'r', 't', 'u'];

/// Apply the common-issue fixups, in order: drop trailing commas before a
/// closing `}` or `]`, then double every backslash that does not open a
/// recognized JSON escape sequence.
///
/// The backslash pass is a heuristic and is not idempotent: applying it
/// twice to the same buffer double-escapes previously valid sequences.
/// Callers apply it at most once per parse attempt.
pub fn normalize_common_issues(text: &str) -> String {
    let no_obj_commas = trailing_comma_obj_re().replace_all(text, "}");
    let no_commas = trailing_comma_arr_re().replace_all(&no_obj_commas, "]");
    escape_stray_backslashes(&no_commas)
}

fn trailing_comma_obj_re() -> Regex {
    Regex::new(r",\s*\}").expect("static pattern")
}

fn trailing_comma_arr_re() -> Regex {
    Regex::new(r",\s*\]").expect("static pattern")
}

/// Double each backslash whose next character is not a valid escape
/// follower. Matches are one character wide and scanning advances one
/// character at a time, so `\\a` becomes `\\\\a` on a single pass (the
/// second backslash is itself followed by an invalid follower).
fn escape_stray_backslashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            let valid = chars
                .peek()
                .map(|next| ESCAPE_FOLLOWERS.contains(next))
                .unwrap_or(false);
            if valid {
                out.push('\\');
            } else {
                out.push_str("\\\\");
            }
        } else {
            out.push(ch);
        }
    }
    out
}
