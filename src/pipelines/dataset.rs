//! Dataset types: per split features and labels, plus the build report.
use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::features::Features;
use crate::io::reader::Split;
use crate::lang::LanguageGroup;

/// Parallel feature mappings and labels of a split.
///
/// `features[i]` is labelled `labels[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitData {
    features: Vec<Features>,
    labels: Vec<LanguageGroup>,
}

impl SplitData {
    pub(crate) fn push(&mut self, features: Features, label: LanguageGroup) {
        self.features.push(features);
        self.labels.push(label);
    }

    pub fn features(&self) -> &[Features] {
        &self.features
    }

    pub fn labels(&self) -> &[LanguageGroup] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Features, LanguageGroup)> {
        self.features.iter().zip(self.labels.iter().copied())
    }
}

/// Counters of a dataset build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// html documents read from the archive.
    pub seen: usize,
    /// Entries that could not be read.
    pub skipped_entries: usize,
    pub unmapped_labels: usize,
    pub unmatched_filenames: usize,
    pub train: usize,
    pub dev: usize,
    pub test: usize,
}

impl BuildReport {
    pub(crate) fn assigned(&mut self, split: Split) {
        match split {
            Split::Train => self.train += 1,
            Split::Dev => self.dev += 1,
            Split::Test => self.test += 1,
        }
    }

    pub fn log(&self) {
        info!("{}", self);
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents seen, {} unreadable entries, {} unmapped labels, {} unmatched filenames. train: {}, dev: {}, test: {}",
            self.seen,
            self.skipped_entries,
            self.unmapped_labels,
            self.unmatched_filenames,
            self.train,
            self.dev,
            self.test
        )
    }
}

/// Train, dev and test splits of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    train: SplitData,
    dev: SplitData,
    test: SplitData,
    report: BuildReport,
}

impl Dataset {
    pub(crate) fn split_mut(&mut self, split: Split) -> &mut SplitData {
        match split {
            Split::Train => &mut self.train,
            Split::Dev => &mut self.dev,
            Split::Test => &mut self.test,
        }
    }

    pub(crate) fn report_mut(&mut self) -> &mut BuildReport {
        &mut self.report
    }

    pub fn split(&self, split: Split) -> &SplitData {
        match split {
            Split::Train => &self.train,
            Split::Dev => &self.dev,
            Split::Test => &self.test,
        }
    }

    pub fn train(&self) -> &SplitData {
        &self.train
    }

    pub fn dev(&self) -> &SplitData {
        &self.dev
    }

    pub fn test(&self) -> &SplitData {
        &self.test
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }
}
