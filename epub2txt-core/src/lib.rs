//! epub2txt Core Library
//!
//! This crate converts an EPUB archive into a single plain-text document that
//! follows the book's reading order. The container descriptor and package
//! document are resolved into an ordered list of content documents, each of
//! which is rendered to text and joined with a blank line between documents.

pub mod archive;
pub mod error;
pub mod extract;
pub mod package;
pub mod pipeline;
pub mod types;

pub use archive::{ArchiveReader, Entry};
pub use error::{ArchiveError, ConvertError, ExtractError, PackageError, Result};
pub use extract::TextExtractor;
pub use package::{resolve_content_order, PackageResolver};
pub use pipeline::{convert, ExtractedBook, Pipeline, DOCUMENT_SEPARATOR};
pub use types::{
    ContentPath, ConversionReport, Manifest, ManifestItem, SkipReason, SkippedDocument,
    SpineEntry,
};

