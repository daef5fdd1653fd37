//! Manifest and spine types parsed from the package document

use std::collections::HashMap;
use std::fmt;

/// A resource declared in the package manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestItem {
    /// Identifier, unique within one package document
    pub id: String,

    /// Location relative to the package document's directory
    pub href: String,

    /// Declared media type, as written by the producer
    pub media_type: String,
}

impl ManifestItem {
    /// Create a new manifest item
    pub fn new(
        id: impl Into<String>,
        href: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            media_type: media_type.into(),
        }
    }

    /// Whether this item holds (X)HTML content.
    ///
    /// Substring match, so `text/html`, `application/xhtml+xml` and vendor
    /// spellings all qualify. Case-sensitive.
    pub fn is_html(&self) -> bool {
        self.media_type.contains("html")
    }
}

/// Manifest items keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    items: HashMap<String, ManifestItem>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. A later item with the same id replaces the earlier one.
    pub fn insert(&mut self, item: ManifestItem) {
        self.items.insert(item.id.clone(), item);
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&ManifestItem> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ManifestItem> for Manifest {
    fn from_iter<I: IntoIterator<Item = ManifestItem>>(iter: I) -> Self {
        let mut manifest = Manifest::new();
        for item in iter {
            manifest.insert(item);
        }
        manifest
    }
}

/// A spine position, referring to a manifest item by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpineEntry {
    pub idref: String,
}

impl SpineEntry {
    pub fn new(idref: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
        }
    }
}

/// Archive-relative, forward-slash path of a content document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentPath(String);

impl ContentPath {
    /// Wrap a path, converting any backslash separators to forward slashes
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.contains('\\') {
            Self(path.replace('\\', "/"))
        } else {
            Self(path)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
