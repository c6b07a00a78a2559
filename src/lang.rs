//! Native language (L1) labels.
//!
//! Lang-8 pages carry the native language of the writer as free text.
//! Only five languages are kept, grouped in two classes. Matching is exact and case-sensitive:
//! `"spanish"` or `"Spanish (Mexico)"` are not recognized and the document gets dropped.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Class label of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageGroup {
    European,
    Asian,
}

impl LanguageGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageGroup::European => "European",
            LanguageGroup::Asian => "Asian",
        }
    }
}

impl fmt::Display for LanguageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw native language to its class.
///
/// Returns [None] for a missing label and for every language outside of
/// French, Spanish, Mandarin, Japanese and Korean (Russian included).
pub fn map_label(label_source: Option<&str>) -> Option<LanguageGroup> {
    match label_source? {
        "French" | "Spanish" => Some(LanguageGroup::European),
        "Mandarin" | "Japanese" | "Korean" => Some(LanguageGroup::Asian),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{map_label, LanguageGroup};

    #[test]
    fn european() {
        assert_eq!(map_label(Some("Spanish")), Some(LanguageGroup::European));
        assert_eq!(map_label(Some("French")), Some(LanguageGroup::European));
    }

    #[test]
    fn asian() {
        assert_eq!(map_label(Some("Korean")), Some(LanguageGroup::Asian));
        assert_eq!(map_label(Some("Japanese")), Some(LanguageGroup::Asian));
        assert_eq!(map_label(Some("Mandarin")), Some(LanguageGroup::Asian));
    }

    #[test]
    fn unmapped_are_excluded() {
        assert_eq!(map_label(Some("Russian")), None);
        assert_eq!(map_label(Some("Thai")), None);
        assert_eq!(map_label(None), None);
    }

    #[test]
    fn no_normalization() {
        assert_eq!(map_label(Some("spanish")), None);
        assert_eq!(map_label(Some(" Spanish")), None);
        assert_eq!(map_label(Some("KOREAN")), None);
        assert_eq!(map_label(Some("Chinese")), None);
    }

    #[test]
    fn display() {
        assert_eq!(LanguageGroup::European.to_string(), "European");
        assert_eq!(LanguageGroup::Asian.to_string(), "Asian");
    }
}
