//! Line accumulation and whitespace normalization
//!
//! Text is gathered into explicit lines, one per block boundary, so that
//! newlines found inside text nodes can never be confused with the line
//! breaks inserted at block elements. Normalization then runs in two
//! phases: whitespace runs inside each line collapse to one space, and
//! lines left empty are dropped.

/// Lines of raw text, split at block boundaries
#[derive(Debug)]
pub(crate) struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub(crate) fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Append a text node. Surrounding whitespace is trimmed; a node that is
    /// only whitespace adds nothing.
    pub(crate) fn push_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if let Some(line) = self.lines.last_mut() {
            line.push_str(text);
            line.push(' ');
        }
    }

    /// Start a new line
    pub(crate) fn break_line(&mut self) {
        self.lines.push(String::new());
    }

    /// Normalize and join the lines with `\n`, without a trailing newline
    pub(crate) fn finish(self) -> String {
        self.lines
            .iter()
            .map(|line| collapse_whitespace(line))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Replace every run of ASCII whitespace with a single space and trim
pub(crate) fn collapse_whitespace(line: &str) -> String {
    line.split_ascii_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
