//! HTML to plain text extraction
//!
//! The markup is parsed into a tree and walked in document order. Text nodes
//! are appended to the current line; block elements start a new line before
//! their children, and paragraph-like blocks also end it after them.

mod encoding;
mod normalize;

pub use encoding::decode_markup;

use crate::error::ExtractError;
use ego_tree::iter::Edge;
use normalize::LineBuffer;
use scraper::{Html, Node};

/// Renders content documents as plain text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Decode and render raw markup bytes
    pub fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let markup = decode_markup(bytes)?;
        Ok(self.extract_str(&markup))
    }

    /// Render already-decoded markup.
    ///
    /// Output lines are the non-empty lines between block boundaries, with
    /// internal whitespace collapsed, joined by `\n`.
    pub fn extract_str(&self, markup: &str) -> String {
        let document = Html::parse_document(markup);
        let mut buffer = LineBuffer::new();

        for edge in document.tree.root().traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Text(text) => buffer.push_text(text),
                    Node::Element(element) if breaks_before(element.name()) => {
                        buffer.break_line()
                    }
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(element) = node.value() {
                        if breaks_after(element.name()) {
                            buffer.break_line();
                        }
                    }
                }
            }
        }

        buffer.finish()
    }
}

/// Elements that start a new line
fn breaks_before(tag: &str) -> bool {
    matches!(tag, "br" | "hr") || breaks_after(tag)
}

/// Elements that also end their line. `br` and `hr` are void and excluded.
fn breaks_after(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "li"
    )
}
