//! Character-classifying state machine shared by the extractor and the
//! truncation repairer.
//!
//! Both scanners must agree byte-for-byte on which brackets are structural
//! and which are string content, so the transition function lives here and
//! nowhere else.

/// Scanner state while walking model output one character at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any string literal; brackets here are structural.
    #[default]
    Normal,
    /// Inside a string literal.
    InString,
    /// Inside a string literal, and the next character is escaped.
    EscapeNext,
}

impl ScanState {
    /// Advance the state by one character.
    ///
    /// A backslash inside a string escapes exactly the next character. An
    /// unescaped double quote toggles the in-string state. A backslash
    /// outside a string is plain text.
    pub fn step(self, ch: char) -> ScanState {
        match self {
            ScanState::Normal => {
                if ch == '"' {
                    ScanState::InString
                } else {
                    ScanState::Normal
                }
            }
            ScanState::InString => match ch {
                '\\' => ScanState::EscapeNext,
                '"' => ScanState::Normal,
                _ => ScanState::InString,
            },
            ScanState::EscapeNext => ScanState::InString,
        }
    }

    /// True when the scanner is inside a string literal (escaped or not).
    pub fn in_string(self) -> bool {
        !matches!(self, ScanState::Normal)
    }

    /// True when `ch`, seen in this state, is a structural character
    /// (bracket, brace, comma, colon) rather than string content.
    pub fn is_structural(self, ch: char) -> bool {
        self == ScanState::Normal && matches!(ch, '{' | '}' | '[' | ']' | ',' | ':')
    }
}
