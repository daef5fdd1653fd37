//! META-INF/container.xml parsing

use super::xml::{attribute, is_under, walk_elements};
use crate::error::PackageError;

/// Fixed location of the container descriptor
pub const CONTAINER_PATH: &str = "META-INF/container.xml";

/// Return the `full-path` of the first `rootfile` in a container descriptor.
///
/// Later root-files are ignored. A `rootfile` without a `full-path`
/// attribute names nothing, so the next `rootfile` is used instead; if none
/// carries one the container has no root-file.
pub fn parse_container(bytes: &[u8]) -> Result<String, PackageError> {
    let mut first: Option<String> = None;

    walk_elements(bytes, "container", |ancestors, element| {
        if first.is_some()
            || element.local_name().as_ref() != b"rootfile"
            || !is_under(ancestors, &["container", "rootfiles"])
        {
            return Ok(());
        }
        first = attribute(element, "full-path")?;
        Ok(())
    })
    .map_err(PackageError::MalformedContainer)?;

    first.ok_or(PackageError::NoRootFile)
}
