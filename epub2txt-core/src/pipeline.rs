//! Conversion pipeline: archive -> reading order -> text -> sink

use crate::archive::ArchiveReader;
use crate::error::{ConvertError, Result};
use crate::extract::TextExtractor;
use crate::package::PackageResolver;
use crate::types::{ContentPath, ConversionReport, SkipReason, SkippedDocument};
use std::io::{Read, Seek, Write};
use std::path::Path;

/// Separator between consecutive documents in the output
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// Text produced from one archive, plus what was skipped on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBook {
    pub text: String,
    pub report: ConversionReport,
}

/// Drives a full EPUB to text conversion.
///
/// Holds no state between runs; one value can convert any number of books.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    extractor: TextExtractor,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific text extractor
    pub fn with_extractor(mut self, extractor: TextExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Convert the EPUB at `input` and write the text to `output`
    pub fn convert_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        self.convert_file_with(input, output, |_| {})
    }

    /// Like [`Pipeline::convert_file`], calling `on_skip` as each document is
    /// skipped rather than only reporting it at the end
    pub fn convert_file_with<F>(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        on_skip: F,
    ) -> Result<ConversionReport>
    where
        F: FnMut(&SkippedDocument),
    {
        let output = output.as_ref();

        // The archive is dropped, and its file closed, before the output is written
        let book = {
            let mut archive = ArchiveReader::open(input)?;
            self.extract_book_with(&mut archive, on_skip)?
        };

        std::fs::write(output, &book.text).map_err(|source| ConvertError::Output {
            path: output.to_path_buf(),
            source,
        })?;

        Ok(book.report)
    }

    /// Convert an already-open archive and write the text to `sink`
    pub fn convert_to_writer<R, W>(
        &self,
        archive: &mut ArchiveReader<R>,
        sink: &mut W,
    ) -> Result<ConversionReport>
    where
        R: Read + Seek,
        W: Write,
    {
        let book = self.extract_book(archive)?;
        sink.write_all(book.text.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(ConvertError::Sink)?;
        Ok(book.report)
    }

    /// Resolve the reading order and extract every content document.
    ///
    /// Only resolution failures are errors. A document that is missing,
    /// unreadable or malformed is recorded in the report and skipped.
    pub fn extract_book<R: Read + Seek>(
        &self,
        archive: &mut ArchiveReader<R>,
    ) -> Result<ExtractedBook> {
        self.extract_book_with(archive, |_| {})
    }

    /// Like [`Pipeline::extract_book`], calling `on_skip` for each skipped
    /// document at the point it is skipped
    pub fn extract_book_with<R, F>(
        &self,
        archive: &mut ArchiveReader<R>,
        mut on_skip: F,
    ) -> Result<ExtractedBook>
    where
        R: Read + Seek,
        F: FnMut(&SkippedDocument),
    {
        let paths = PackageResolver::new(archive).resolve()?;
        tracing::debug!("Reading order has {} content documents", paths.len());

        let mut report = ConversionReport::default();
        let mut parts: Vec<String> = Vec::with_capacity(paths.len());

        for path in paths {
            match self.extract_document(archive, &path) {
                Ok(text) => {
                    report.documents += 1;
                    if !text.is_empty() {
                        parts.push(text);
                    }
                }
                Err(reason) => {
                    let skipped = SkippedDocument { path, reason };
                    tracing::warn!("Skipping document: {}", skipped);
                    on_skip(&skipped);
                    report.skipped.push(skipped);
                }
            }
        }

        let text = parts.join(DOCUMENT_SEPARATOR);
        report.output_bytes = text.len();

        tracing::info!(
            "Extracted {} documents ({} skipped)",
            report.documents,
            report.skipped.len()
        );

        Ok(ExtractedBook { text, report })
    }

    fn extract_document<R: Read + Seek>(
        &self,
        archive: &mut ArchiveReader<R>,
        path: &ContentPath,
    ) -> std::result::Result<String, SkipReason> {
        let entry = archive
            .find_entry(path.as_str())
            .ok_or(SkipReason::MissingEntry)?;

        let bytes = archive
            .read_all(&entry)
            .map_err(|e| SkipReason::Unreadable(e.to_string()))?;

        self.extractor
            .extract(&bytes)
            .map_err(|e| SkipReason::MalformedMarkup(e.to_string()))
    }
}

/// Convert `input` to `output` with the default pipeline
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConversionReport> {
    Pipeline::new().convert_file(input, output)
}
