//! Resolution of the reading order from the package metadata chain
//!
//! `META-INF/container.xml` names the package document; the package
//! document's manifest and spine give the ordered content documents.

mod container;
mod opf;
pub mod path;
mod xml;

pub use container::{parse_container, CONTAINER_PATH};
pub use opf::parse_package_document;

use crate::archive::{ArchiveReader, Entry};
use crate::error::{PackageError, Result};
use crate::types::{ContentPath, Manifest, SpineEntry};
use std::io::{Read, Seek};

/// Walks container descriptor -> package document -> spine for one archive
pub struct PackageResolver<'a, R> {
    archive: &'a mut ArchiveReader<R>,
}

impl<'a, R: Read + Seek> PackageResolver<'a, R> {
    pub fn new(archive: &'a mut ArchiveReader<R>) -> Self {
        Self { archive }
    }

    /// Find `META-INF/container.xml`
    pub fn locate_container_descriptor(&self) -> std::result::Result<Entry, PackageError> {
        self.archive
            .find_entry(CONTAINER_PATH)
            .ok_or(PackageError::ContainerNotFound)
    }

    /// Find the package document named by the container descriptor
    pub fn locate_package_document(
        &self,
        path: &str,
    ) -> std::result::Result<Entry, PackageError> {
        self.archive
            .find_entry(path)
            .ok_or_else(|| PackageError::PackageDocumentNotFound(path.to_string()))
    }

    /// Produce the ordered content document paths for the archive.
    ///
    /// Every failure here is fatal to the conversion.
    pub fn resolve(&mut self) -> Result<Vec<ContentPath>> {
        let container = self.locate_container_descriptor()?;
        let container_bytes = self.archive.read_all(&container)?;
        let package_path = parse_container(&container_bytes)?;
        tracing::debug!("Package document: {}", package_path);

        let package = self.locate_package_document(&package_path)?;
        let package_bytes = self.archive.read_all(&package)?;
        let (manifest, spine) = parse_package_document(&package_bytes)?;
        tracing::debug!(
            "Manifest has {} items, spine has {} entries",
            manifest.len(),
            spine.len()
        );

        Ok(resolve_content_order(
            &manifest,
            &spine,
            path::parent_dir(package.name()),
        ))
    }
}

/// Map spine entries to content document paths, preserving spine order.
///
/// Entries whose id is not in the manifest, or whose media type does not
/// contain `html`, are dropped without error.
pub fn resolve_content_order(
    manifest: &Manifest,
    spine: &[SpineEntry],
    package_dir: &str,
) -> Vec<ContentPath> {
    spine
        .iter()
        .filter_map(|entry| {
            let Some(item) = manifest.get(&entry.idref) else {
                tracing::debug!("Spine entry '{}' is not in the manifest", entry.idref);
                return None;
            };
            if !item.is_html() {
                tracing::debug!(
                    "Spine entry '{}' has non-HTML media type '{}'",
                    entry.idref,
                    item.media_type
                );
                return None;
            }
            Some(ContentPath::new(path::join(package_dir, &item.href)))
        })
        .collect()
}
