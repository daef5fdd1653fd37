//! Core types shared by the resolver, extractor and pipeline

mod package;
mod report;

pub use package::{ContentPath, Manifest, ManifestItem, SpineEntry};
pub use report::{ConversionReport, SkipReason, SkippedDocument};
