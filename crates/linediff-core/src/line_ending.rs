//! Line terminator inspection
//!
//! The diff engine splits on `\n` only and keeps any `\r` as line content.
//! This module lets callers notice when two inputs use different styles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix `\n`
    Lf,
    /// Windows `\r\n`
    CrLf,
    /// Both styles present
    Mixed,
    /// No line terminator at all
    None,
}

impl LineEnding {
    pub fn detect(text: &str) -> Self {
        Self::of_lines(&crate::split_lines(text))
    }

    /// Classify a line sequence split on `\n`. Every line but the last was
    /// followed by `\n`, so a trailing `\r` on it marks a `\r\n` terminator.
    pub fn of_lines(lines: &[&str]) -> Self {
        let terminated = &lines[..lines.len().saturating_sub(1)];
        let crlf = terminated.iter().filter(|l| l.ends_with('\r')).count();
        let lf = terminated.len() - crlf;

        match (lf, crlf) {
            (0, 0) => Self::None,
            (_, 0) => Self::Lf,
            (0, _) => Self::CrLf,
            _ => Self::Mixed,
        }
    }

    /// Whether lines ending this way and lines ending `other` way can never
    /// compare equal under exact line matching
    pub fn conflicts_with(self, other: Self) -> bool {
        match (self, other) {
            (Self::None, _) | (_, Self::None) => false,
            (a, b) => a != b || a == Self::Mixed,
        }
    }
}
