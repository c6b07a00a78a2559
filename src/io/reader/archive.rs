/*! Zip archive reading.

[Archive] iterates over the `.html` entries of a Lang-8 zip dump, in archive order,
yielding one [Document] per entry.

The archive handle is owned by the iterator and released when it is dropped.
Iteration is single pass: once an entry has been yielded it is not read again.
!*/
use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use log::{debug, info};
use zip::ZipArchive;

use super::{Document, PageParser};
use crate::error::Error;

const HTML_EXTENSION: &str = ".html";
/// Upper bound on the buffer reserved from an entry's declared size.
const MAX_PREALLOC: u64 = 1 << 20;

/// Lang-8 archive, generic over reader type.
pub struct Archive<R> {
    zip: ZipArchive<R>,
    parser: PageParser,
    idx: usize,
}

impl Archive<BufReader<File>> {
    /// Open a zip file.
    ///
    /// Fails if the file does not exist or is not a valid zip archive.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(e.kind(), format!("could not open archive {:?}: {}", path, e))
        })?;
        let archive = Self::new(BufReader::new(file))
            .map_err(|e| Error::Custom(format!("could not read archive {:?}: {}", path, e)))?;
        info!("opened {:?}: {} entries", path, archive.nb_entries());
        Ok(archive)
    }
}

impl<R: Read + Seek> Archive<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        Ok(Self {
            zip: ZipArchive::new(reader)?,
            parser: PageParser::new()?,
            idx: 0,
        })
    }

    /// Number of entries in the archive, html or not.
    pub fn nb_entries(&self) -> usize {
        self.zip.len()
    }

    /// Read and parse entry `idx`.
    /// Returns [None] for directories and non-html entries.
    fn read_entry(&mut self, idx: usize) -> Result<Option<Document>, Error> {
        let mut entry = self.zip.by_index(idx)?;
        if entry.is_dir() || !entry.name().ends_with(HTML_EXTENSION) {
            debug!("skipping non-html entry {}", entry.name());
            return Ok(None);
        }

        let filename = entry.name().to_string();
        // the declared size comes from the archive and is not trusted
        let mut bytes = Vec::with_capacity(capacity_hint(entry.size()));
        entry.read_to_end(&mut bytes)?;

        let html = decode_utf8_ignore(&bytes);
        let (label_source, text) = self.parser.parse(&html);

        Ok(Some(Document::new(label_source, text, filename)))
    }
}

impl<R: Read + Seek> Iterator for Archive<R> {
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.zip.len() {
            let idx = self.idx;
            self.idx += 1;

            match self.read_entry(idx) {
                Ok(Some(doc)) => return Some(Ok(doc)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

fn capacity_hint(declared: u64) -> usize {
    declared.min(MAX_PREALLOC) as usize
}

/// Decode bytes as UTF-8, dropping invalid sequences.
///
/// Valid text around an invalid sequence is kept.
pub fn decode_utf8_ignore(mut bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                decoded.push_str(valid);
                return decoded;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                if let Ok(valid) = std::str::from_utf8(valid) {
                    decoded.push_str(valid);
                }
                // error_len is None when the input ends in the middle of a sequence
                let invalid_len = e.error_len().unwrap_or(rest.len());
                bytes = &rest[invalid_len..];
            }
        }
    }
}
