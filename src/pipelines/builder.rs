//! Dataset building pipeline.
//!
//! Drives the archive reader, drops documents without a recognized label or without a split,
//! extracts features of the remaining ones and sorts them into train, dev and test.
//!
//! # Processing
//! 1. The three manifests are loaded. A missing manifest aborts the run.
//! 1. The archive is opened. A missing or corrupt archive aborts the run.
//! 1. Each document gets its label mapped, then its basename matched against the manifests.
//! 1. Features of kept documents are extracted, by chunks of documents in parallel
//!    or one by one in sequential mode. Both produce the same dataset.
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::features::{Extract, Extractors, FeatureConfig, Features};
use crate::io::reader::{Archive, Document, Manifests, Split};
use crate::lang::{map_label, LanguageGroup};
use crate::nlp::Toolkit;
use crate::pipelines::dataset::{BuildReport, Dataset};
use crate::pipelines::pipeline::Pipeline;

/// Documents per parallel chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// How features get extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sequential,
    Parallel { chunk_size: usize },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Parallel {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

pub struct DatasetBuilder {
    archive: PathBuf,
    train: PathBuf,
    dev: PathBuf,
    test: PathBuf,
    config: FeatureConfig,
    mode: Mode,
}

/// A labelled document assigned to a split, waiting for its features.
struct Pending {
    split: Split,
    label: LanguageGroup,
    text: String,
}

impl DatasetBuilder {
    pub fn new(archive: PathBuf, train: PathBuf, dev: PathBuf, test: PathBuf) -> Self {
        Self {
            archive,
            train,
            dev,
            test,
            config: FeatureConfig::default(),
            mode: Mode::default(),
        }
    }

    pub fn config(mut self, config: FeatureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Label and split a document, updating counters.
    /// Returns [None] when the document has to be dropped.
    fn triage(
        document: Result<Document, Error>,
        manifests: &Manifests,
        report: &mut BuildReport,
    ) -> Option<Pending> {
        let document = match document {
            Ok(document) => document,
            Err(e) => {
                error!("skipping unreadable entry: {:?}", e);
                report.skipped_entries += 1;
                return None;
            }
        };
        report.seen += 1;

        let label = match map_label(document.label_source()) {
            Some(label) => label,
            None => {
                debug!(
                    "{}: dropping label {:?}",
                    document.filename(),
                    document.label_source()
                );
                report.unmapped_labels += 1;
                return None;
            }
        };

        let split = match manifests.assign(document.basename()) {
            Some(split) => split,
            None => {
                debug!("{}: not in any split", document.filename());
                report.unmatched_filenames += 1;
                return None;
            }
        };
        report.assigned(split);

        Some(Pending {
            split,
            label,
            text: document.into_text(),
        })
    }

    /// Build a dataset from a document stream.
    ///
    /// Unreadable entries (`Err` items) are logged and counted, never fatal.
    pub fn build_from<I>(
        documents: I,
        manifests: &Manifests,
        extractors: &Extractors,
        toolkit: &Toolkit,
        mode: Mode,
    ) -> Dataset
    where
        I: Iterator<Item = Result<Document, Error>>,
    {
        let mut dataset = Dataset::default();
        match mode {
            Mode::Sequential => {
                for document in documents {
                    if let Some(p) = Self::triage(document, manifests, dataset.report_mut()) {
                        let features = extractors.extract(&p.text, toolkit);
                        dataset.split_mut(p.split).push(features, p.label);
                    }
                }
            }
            Mode::Parallel { chunk_size } => {
                let chunks = documents.chunks(chunk_size.max(1));
                for chunk in &chunks {
                    let pending: Vec<Pending> = chunk
                        .filter_map(|document| {
                            Self::triage(document, manifests, dataset.report_mut())
                        })
                        .collect();

                    // collect keeps the order of the chunk
                    let features: Vec<Features> = pending
                        .par_iter()
                        .map(|p| extractors.extract(&p.text, toolkit))
                        .collect();

                    for (p, features) in pending.into_iter().zip(features) {
                        dataset.split_mut(p.split).push(features, p.label);
                    }
                }
            }
        }
        dataset
    }
}

impl Pipeline<Dataset> for DatasetBuilder {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<Dataset, Error> {
        let extractors = Extractors::from_config(&self.config)?;
        info!(
            "dataset builder {}, schema {}: {} features from {:?}",
            Self::version(),
            self.config.schema,
            extractors.keys().len(),
            extractors.names()
        );

        let manifests = Manifests::from_paths(&self.train, &self.dev, &self.test)?;
        let archive = Archive::from_path(&self.archive)?;

        let toolkit = Toolkit::new();
        let dataset = Self::build_from(archive, &manifests, &extractors, &toolkit, self.mode);
        dataset.report().log();
        Ok(dataset)
    }
}

/// Build the train, dev and test splits of an archive with the default feature schema.
pub fn build(archive: &Path, train: &Path, dev: &Path, test: &Path) -> Result<Dataset, Error> {
    DatasetBuilder::new(
        archive.to_path_buf(),
        train.to_path_buf(),
        dev.to_path_buf(),
        test.to_path_buf(),
    )
    .run()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{DatasetBuilder, Mode};
    use crate::error::Error;
    use crate::features::{Extractors, FeatureConfig};
    use crate::io::reader::{Document, Manifests, Split};
    use crate::lang::LanguageGroup;
    use crate::nlp::Toolkit;
    use crate::pipelines::Dataset;

    fn doc(label: Option<&str>, text: &str, filename: &str) -> Result<Document, Error> {
        Ok(Document::new(
            label.map(String::from),
            text.to_string(),
            filename.to_string(),
        ))
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn build(docs: Vec<Result<Document, Error>>, manifests: &Manifests, mode: Mode) -> Dataset {
        let extractors = Extractors::from_config(&FeatureConfig::default()).unwrap();
        DatasetBuilder::build_from(docs.into_iter(), manifests, &extractors, &Toolkit::new(), mode)
    }

    #[test]
    fn french_and_thai() {
        let manifests = Manifests::new(set(&["1.html", "2.html"]), set(&[]), set(&[]));
        let docs = vec![
            doc(Some("French"), "Bonjour. I like Paris.", "1.html"),
            doc(Some("Thai"), "Hello from Bangkok.", "2.html"),
        ];
        let ds = build(docs, &manifests, Mode::Sequential);
        assert_eq!(ds.train().len(), 1);
        assert_eq!(ds.train().labels(), &[LanguageGroup::European]);
        assert!(ds.dev().is_empty());
        assert!(ds.test().is_empty());
        assert_eq!(ds.report().unmapped_labels, 1);
        assert_eq!(ds.report().seen, 2);
    }

    #[test]
    fn basename_matching() {
        let manifests = Manifests::new(set(&["a.html"]), set(&[]), set(&[]));
        let docs = vec![
            doc(Some("Korean"), "Hi.", "docs/a.html"),
            doc(Some("Russian"), "Hi.", "docs/a.html"),
            doc(None, "Hi.", "docs/a.html"),
        ];
        let ds = build(docs, &manifests, Mode::Sequential);
        assert_eq!(ds.train().labels(), &[LanguageGroup::Asian]);
        assert_eq!(ds.report().unmapped_labels, 2);
    }

    #[test]
    fn split_priority_and_unmatched() {
        let manifests = Manifests::new(set(&["x.html"]), set(&["x.html", "d.html"]), set(&["t.html"]));
        let docs = vec![
            doc(Some("Japanese"), "One.", "x.html"),
            doc(Some("Spanish"), "Two.", "d.html"),
            doc(Some("Mandarin"), "Three.", "t.html"),
            doc(Some("French"), "Four.", "nowhere.html"),
        ];
        let ds = build(docs, &manifests, Mode::Sequential);
        assert_eq!(ds.train().len(), 1);
        assert_eq!(ds.dev().labels(), &[LanguageGroup::European]);
        assert_eq!(ds.test().labels(), &[LanguageGroup::Asian]);
        assert_eq!(ds.report().unmatched_filenames, 1);
        assert_eq!(
            (ds.report().train, ds.report().dev, ds.report().test),
            (1, 1, 1)
        );
    }

    #[test]
    fn unreadable_entries_are_skipped() {
        let manifests = Manifests::new(set(&["a.html", "b.html"]), set(&[]), set(&[]));
        let docs = vec![
            doc(Some("French"), "A.", "a.html"),
            Err(Error::Custom("broken entry".to_string())),
            doc(Some("French"), "B.", "b.html"),
        ];
        let ds = build(docs, &manifests, Mode::default());
        assert_eq!(ds.train().len(), 2);
        assert_eq!(ds.report().skipped_entries, 1);
        assert_eq!(ds.report().seen, 2);
    }

    #[test]
    fn identical_schema_across_documents() {
        let manifests = Manifests::new(set(&["a.html", "b.html", "c.html"]), set(&[]), set(&[]));
        let docs = vec![
            doc(Some("French"), "", "a.html"),
            doc(Some("Korean"), "I love Seoul. Maybe I will go back.", "b.html"),
            doc(Some("Spanish"), "   ", "c.html"),
        ];
        let ds = build(docs, &manifests, Mode::Sequential);
        let schemas: HashSet<Vec<&str>> = ds
            .train()
            .features()
            .iter()
            .map(|f| f.keys().collect())
            .collect();
        assert_eq!(schemas.len(), 1);
    }

    #[test]
    fn parallel_matches_sequential() {
        const LABELS: &[&str] = &["French", "Spanish", "Mandarin", "Japanese", "Korean", "Thai"];
        const WORDS: &[&str] = &["i", "the", "bus", "tokyo", "maybe", "church", "big", ".", "!"];
        let mut rng = StdRng::seed_from_u64(42);

        let mut train = HashSet::new();
        let mut dev = HashSet::new();
        let mut test = HashSet::new();
        let mut docs = Vec::new();
        for idx in 0..300 {
            let name = format!("{}.html", idx);
            match rng.gen_range(0..4) {
                0 => {
                    train.insert(name.clone());
                }
                1 => {
                    dev.insert(name.clone());
                }
                2 => {
                    test.insert(name.clone());
                }
                _ => (),
            }
            let text: Vec<&str> = (0..rng.gen_range(0..30))
                .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
                .collect();
            let label = LABELS[rng.gen_range(0..LABELS.len())];
            docs.push((label, text.join(" "), format!("lang-8/{}", name)));
        }
        let manifests = Manifests::new(train, dev, test);
        let to_docs = || {
            docs.iter()
                .map(|(l, t, f)| doc(Some(*l), t, f))
                .collect::<Vec<_>>()
        };

        let sequential = build(to_docs(), &manifests, Mode::Sequential);
        for chunk_size in [1, 7, 64, 1000] {
            let parallel = build(to_docs(), &manifests, Mode::Parallel { chunk_size });
            assert_eq!(parallel, sequential, "chunk size {}", chunk_size);
        }
        for split in Split::ALL {
            assert_eq!(
                sequential.split(split).features().len(),
                sequential.split(split).labels().len()
            );
        }
    }
}
