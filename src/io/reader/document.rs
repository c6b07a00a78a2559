//! Extracted Lang-8 document.
use serde::Serialize;

/// A single journal entry, as found in the archive.
///
/// Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    label_source: Option<String>,
    text: String,
    filename: String,
}

impl Document {
    pub fn new(label_source: Option<String>, text: String, filename: String) -> Self {
        Self {
            label_source,
            text,
            filename,
        }
    }

    /// Raw native language, [None] if the page has none.
    pub fn label_source(&self) -> Option<&str> {
        self.label_source.as_deref()
    }

    /// Normalized entry text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Full path of the entry inside the archive.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Filename without its directory prefix, as listed in split manifests.
    pub fn basename(&self) -> &str {
        basename(&self.filename)
    }
}

/// Strip any directory prefix from an archive path.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
