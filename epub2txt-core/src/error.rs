//! Error types for epub2txt core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Top-level error type for a conversion run.
///
/// Every variant is fatal. Problems with a single content document are not
/// errors; they are reported as [`crate::types::SkippedDocument`] entries.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    #[error("failed to write output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Sink(#[source] std::io::Error),
}

/// Errors raised while opening or reading the zip container
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a valid zip archive: {0}")]
    Corrupt(String),

    #[error("failed to read entry {name}: {reason}")]
    Read { name: String, reason: String },
}

/// Errors raised while resolving the container descriptor and package document
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("container.xml file not found in EPUB")]
    ContainerNotFound,

    #[error("failed to parse container.xml: {0}")]
    MalformedContainer(String),

    #[error("no rootfile found in container.xml")]
    NoRootFile,

    #[error("OPF file not found at path: {0}")]
    PackageDocumentNotFound(String),

    #[error("failed to parse OPF file: {0}")]
    MalformedPackageDocument(String),
}

/// Errors raised while turning one content document into text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("malformed markup: {0}")]
    MalformedMarkup(String),
}
