//! Zip archive access with exact-name entry lookup
//!
//! Entry names are indexed once when the archive is opened, in forward-slash
//! form, so lookups never scan the central directory again. The underlying
//! file handle is owned by [`ArchiveReader`] and released when it is dropped.

use crate::error::ArchiveError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// A located archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    index: usize,
    name: String,
}

impl Entry {
    /// Entry name in forward-slash form
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Random-access reader over a zip archive
pub struct ArchiveReader<R = BufReader<File>> {
    archive: ZipArchive<R>,
    names: HashMap<String, usize>,
}

impl ArchiveReader<BufReader<File>> {
    /// Open a zip file from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ArchiveError::NotFound(path.to_path_buf())
            } else {
                ArchiveError::Open {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> ArchiveReader<R> {
    /// Read the central directory of an already-open archive
    pub fn from_reader(reader: R) -> Result<Self, ArchiveError> {
        let archive = ZipArchive::new(reader).map_err(|e| ArchiveError::Corrupt(e.to_string()))?;

        let mut names = HashMap::with_capacity(archive.len());
        for (index, name) in archive.file_names().enumerate() {
            // First entry wins if a producer wrote the same name twice
            names.entry(normalize_name(name)).or_insert(index);
        }

        tracing::debug!("Opened archive with {} entries", names.len());

        Ok(Self { archive, names })
    }

    /// Look up an entry by exact, case-sensitive name.
    ///
    /// Backslashes in `name` are treated as separators, matching how entry
    /// names were indexed.
    pub fn find_entry(&self, name: &str) -> Option<Entry> {
        let name = normalize_name(name);
        self.names
            .get(&name)
            .map(|&index| Entry { index, name })
    }

    /// Read the full contents of an entry
    pub fn read_all(&mut self, entry: &Entry) -> Result<Vec<u8>, ArchiveError> {
        let read_error = |reason: String| ArchiveError::Read {
            name: entry.name.clone(),
            reason,
        };

        let mut file = self
            .archive
            .by_index(entry.index)
            .map_err(|e| read_error(e.to_string()))?;

        // The declared size comes from the archive, so it is not trusted as a hint
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| read_error(e.to_string()))?;

        Ok(data)
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Archive-normalized form of an entry name
fn normalize_name(name: &str) -> String {
    name.replace('\\', "/")
}
