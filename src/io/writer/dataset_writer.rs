//! CSV writer for datasets.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::features::FeatureConfig;
use crate::io::reader::Split;
use crate::pipelines::{BuildReport, Dataset, DatasetBuilder, Pipeline, SplitData};
use crate::processing::DictVectorizer;

const LABEL_COLUMN: &str = "label";
const SCHEMA_FILE: &str = "features.json";

/// Contents of `features.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile {
    pub version: String,
    pub config: FeatureConfig,
    /// Feature columns, in CSV order. The label column comes last.
    pub columns: Vec<String>,
    pub report: BuildReport,
}

pub struct DatasetWriter {
    dst: PathBuf,
}

impl DatasetWriter {
    /// Writer into `dst`, which is created if needed.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        if !dst.exists() {
            warn!("Destination {:?} does not exist. Creating", dst);
            std::fs::create_dir_all(dst)?;
        }
        if !dst.is_dir() {
            return Err(Error::Custom(format!(
                "Destination has to be a directory: {:?}",
                dst
            )));
        }
        Ok(Self {
            dst: dst.to_path_buf(),
        })
    }

    pub fn path(&self, split: Split) -> PathBuf {
        self.dst.join(format!("{}.csv", split))
    }

    pub fn schema_path(&self) -> PathBuf {
        self.dst.join(SCHEMA_FILE)
    }

    /// Fit a vectorizer on the train split and write every split with it.
    pub fn write(&self, dataset: &Dataset, config: &FeatureConfig) -> Result<DictVectorizer, Error> {
        let vectorizer = DictVectorizer::fit(dataset.train().features());
        for split in Split::ALL {
            self.write_split(split, dataset.split(split), &vectorizer)?;
        }

        let schema = SchemaFile {
            version: DatasetBuilder::version().to_string(),
            config: config.clone(),
            columns: vectorizer.columns().to_vec(),
            report: *dataset.report(),
        };
        let mut out = BufWriter::new(File::create(self.schema_path())?);
        serde_json::to_writer_pretty(&mut out, &schema)?;
        out.flush()?;
        info!(
            "wrote {} feature columns into {:?}",
            vectorizer.width(),
            self.dst
        );
        Ok(vectorizer)
    }

    fn write_split(
        &self,
        split: Split,
        data: &SplitData,
        vectorizer: &DictVectorizer,
    ) -> Result<(), Error> {
        let path = self.path(split);
        let mut w = csv::Writer::from_path(&path)?;

        let header = vectorizer
            .columns()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(LABEL_COLUMN));
        w.write_record(header)?;

        for (features, label) in data.iter() {
            let row = vectorizer.transform_one(features);
            let record = row
                .iter()
                .map(|v| v.to_string())
                .chain(std::iter::once(label.to_string()));
            w.write_record(record)?;
        }
        w.flush()?;
        info!("{}: {} rows written to {:?}", split, data.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::{DatasetWriter, SchemaFile};
    use crate::features::{FeatureConfig, Features};
    use crate::io::reader::Split;
    use crate::lang::LanguageGroup;
    use crate::pipelines::{Dataset, DatasetBuilder, Pipeline};

    fn features(ratio: f64, flag: bool) -> Features {
        let mut f = Features::new();
        f.insert("ratio", ratio);
        f.insert("flag", flag);
        f
    }

    fn dataset() -> Dataset {
        let mut ds = Dataset::default();
        ds.split_mut(Split::Train)
            .push(features(0.5, true), LanguageGroup::European);
        ds.split_mut(Split::Train)
            .push(features(0.25, false), LanguageGroup::Asian);
        ds.split_mut(Split::Test)
            .push(features(1.0, false), LanguageGroup::Asian);
        ds
    }

    #[test]
    fn writes_splits_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out");
        let writer = DatasetWriter::new(&dst).unwrap();
        let vectorizer = writer.write(&dataset(), &FeatureConfig::default()).unwrap();
        assert_eq!(vectorizer.columns(), &["flag", "ratio"]);

        let train = std::fs::read_to_string(dst.join("train.csv")).unwrap();
        assert_eq!(train, "flag,ratio,label\n1,0.5,European\n0,0.25,Asian\n");

        let dev = std::fs::read_to_string(dst.join("dev.csv")).unwrap();
        assert_eq!(dev, "flag,ratio,label\n");

        let test = std::fs::read_to_string(dst.join("test.csv")).unwrap();
        assert_eq!(test, "flag,ratio,label\n0,1,Asian\n");

        let schema: SchemaFile =
            serde_json::from_reader(File::open(dst.join("features.json")).unwrap()).unwrap();
        assert_eq!(schema.columns, vec!["flag", "ratio"]);
        assert_eq!(schema.config, FeatureConfig::default());
        assert_eq!(schema.version, DatasetBuilder::version());
    }

    #[test]
    fn destination_must_be_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(DatasetWriter::new(file.path()).is_err());
    }
}
