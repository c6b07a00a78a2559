/*! Corpus reading utilities

- [Archive] iterates over the pages of a Lang-8 zip dump, yielding [Document]s.
- [PageParser] extracts the native language and entry text from a page.
- [Manifests] holds the train/dev/test filename lists.
!*/
mod archive;
mod document;
mod manifest;
mod page;

pub use archive::{decode_utf8_ignore, Archive};
pub use document::{basename, Document};
pub use manifest::{read_manifest, Manifests, Split};
pub use page::{normalize_whitespace, PageParser};
