//! Outcome of a conversion run

use super::ContentPath;
use std::fmt;

/// Why a spine document was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The resolved path has no entry in the archive
    MissingEntry,

    /// The entry exists but could not be read
    Unreadable(String),

    /// The entry was read but its markup could not be processed
    MalformedMarkup(String),
}

/// A content document that was skipped, with the cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub path: ContentPath,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::MissingEntry => write!(f, "content file not found: {}", self.path),
            SkipReason::Unreadable(reason) => {
                write!(f, "error reading {}: {}", self.path, reason)
            }
            SkipReason::MalformedMarkup(reason) => {
                write!(f, "error processing {}: {}", self.path, reason)
            }
        }
    }
}

/// Summary of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of content documents successfully extracted
    pub documents: usize,

    /// Documents skipped with a warning, in spine order
    pub skipped: Vec<SkippedDocument>,

    /// Size of the text written to the sink
    pub output_bytes: usize,
}

impl ConversionReport {
    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
    }
}
