/*! Split manifests

A manifest is a plaintext file listing one bare filename per line.
Three of them (train, dev and test) define the split of the corpus.
!*/
use std::{
    collections::HashSet,
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{info, warn};
use serde::Serialize;

use crate::error::Error;

/// Dataset split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// Splits in matching priority order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filenames of each split.
#[derive(Debug, Default, Clone)]
pub struct Manifests {
    train: HashSet<String>,
    dev: HashSet<String>,
    test: HashSet<String>,
}

impl Manifests {
    pub fn new(train: HashSet<String>, dev: HashSet<String>, test: HashSet<String>) -> Self {
        let m = Self { train, dev, test };
        m.warn_overlaps();
        m
    }

    /// Load the three manifests.
    ///
    /// An unreadable manifest is an error: it is never treated as an empty split.
    pub fn from_paths(train: &Path, dev: &Path, test: &Path) -> Result<Self, Error> {
        let m = Self::new(read_manifest(train)?, read_manifest(dev)?, read_manifest(test)?);
        info!(
            "manifests: {} train, {} dev, {} test",
            m.train.len(),
            m.dev.len(),
            m.test.len()
        );
        Ok(m)
    }

    fn set(&self, split: Split) -> &HashSet<String> {
        match split {
            Split::Train => &self.train,
            Split::Dev => &self.dev,
            Split::Test => &self.test,
        }
    }

    /// Number of filenames listed for a split.
    pub fn len(&self, split: Split) -> usize {
        self.set(split).len()
    }

    /// Find the split of a bare filename.
    ///
    /// Splits are tested in train, dev, test order and the first match wins.
    pub fn assign(&self, basename: &str) -> Option<Split> {
        Split::ALL
            .iter()
            .copied()
            .find(|split| self.set(*split).contains(basename))
    }

    fn warn_overlaps(&self) {
        let pairs = [
            (Split::Train, Split::Dev),
            (Split::Train, Split::Test),
            (Split::Dev, Split::Test),
        ];
        for (a, b) in pairs {
            let shared = self.set(a).intersection(self.set(b)).count();
            if shared > 0 {
                warn!(
                    "{} filenames are listed in both {} and {} manifests, {} wins",
                    shared, a, b, a
                );
            }
        }
    }
}

/// Read a manifest into a set of filenames.
/// Lines are trimmed and blank lines ignored.
pub fn read_manifest(path: &Path) -> Result<HashSet<String>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("could not open manifest {:?}: {}", path, e))
    })?;

    let mut names = HashSet::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.insert(name.to_string());
        }
    }
    Ok(names)
}
