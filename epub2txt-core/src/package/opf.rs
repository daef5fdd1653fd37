//! Package document (OPF) parsing

use super::xml::{attribute, is_under, walk_elements};
use crate::error::PackageError;
use crate::types::{Manifest, ManifestItem, SpineEntry};

/// Collect the manifest items and spine entries of a package document.
///
/// Only `package > manifest > item` and `package > spine > itemref` are
/// considered. Items without an `id` and itemrefs without an `idref` are
/// dropped. Spine order is document order; duplicates are kept.
pub fn parse_package_document(
    bytes: &[u8],
) -> Result<(Manifest, Vec<SpineEntry>), PackageError> {
    let mut manifest = Manifest::new();
    let mut spine = Vec::new();

    walk_elements(bytes, "package", |ancestors, element| {
        match element.local_name().as_ref() {
            b"item" if is_under(ancestors, &["package", "manifest"]) => {
                let Some(id) = attribute(element, "id")? else {
                    return Ok(());
                };
                let href = attribute(element, "href")?.unwrap_or_default();
                let media_type = attribute(element, "media-type")?.unwrap_or_default();
                manifest.insert(ManifestItem::new(id, href, media_type));
            }
            b"itemref" if is_under(ancestors, &["package", "spine"]) => {
                if let Some(idref) = attribute(element, "idref")? {
                    spine.push(SpineEntry::new(idref));
                }
            }
            _ => {}
        }
        Ok(())
    })
    .map_err(PackageError::MalformedPackageDocument)?;

    Ok((manifest, spine))
}
