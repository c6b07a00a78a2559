//! Archive inspection.
//!
//! Prints, for every html entry of an archive, its filename, raw and mapped labels and features,
//! one JSON object per line. Splits are not looked at.
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{error, info};
use serde::Serialize;

use crate::error::Error;
use crate::features::{Extract, Extractors, FeatureConfig, Features};
use crate::io::reader::{Archive, Document};
use crate::lang::{map_label, LanguageGroup};
use crate::nlp::Toolkit;
use crate::pipelines::pipeline::Pipeline;

#[derive(Debug, Serialize)]
struct Record<'a> {
    filename: &'a str,
    label_source: Option<&'a str>,
    label: Option<LanguageGroup>,
    features: Features,
}

pub struct Inspect {
    archive: PathBuf,
    config: FeatureConfig,
}

impl Inspect {
    pub fn new(archive: PathBuf, config: FeatureConfig) -> Self {
        Self { archive, config }
    }

    /// Write one line per document of `documents` into `out`.
    /// Returns the number of lines written.
    pub fn write_records<I, W>(
        documents: I,
        extractors: &Extractors,
        toolkit: &Toolkit,
        out: &mut W,
    ) -> Result<usize, Error>
    where
        I: Iterator<Item = Result<Document, Error>>,
        W: Write,
    {
        let mut written = 0;
        for document in documents {
            let document = match document {
                Ok(document) => document,
                Err(e) => {
                    error!("skipping unreadable entry: {:?}", e);
                    continue;
                }
            };
            let record = Record {
                filename: document.filename(),
                label_source: document.label_source(),
                label: map_label(document.label_source()),
                features: extractors.extract(document.text(), toolkit),
            };
            serde_json::to_writer(&mut *out, &record)?;
            out.write_all(b"\n")?;
            written += 1;
        }
        Ok(written)
    }
}

impl Pipeline<usize> for Inspect {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<usize, Error> {
        let extractors = Extractors::from_config(&self.config)?;
        info!(
            "inspect {}, schema {}: {} features",
            Self::version(),
            self.config.schema,
            extractors.keys().len()
        );
        let archive = Archive::from_path(&self.archive)?;
        let toolkit = Toolkit::new();

        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let written = Self::write_records(archive, &extractors, &toolkit, &mut out)?;
        out.flush()?;

        info!("inspected {} documents", written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::Inspect;
    use crate::error::Error;
    use crate::features::{Extractors, FeatureConfig, SchemaVersion};
    use crate::io::reader::Document;
    use crate::nlp::Toolkit;

    #[test]
    fn json_lines() {
        let docs: Vec<Result<Document, Error>> = vec![
            Ok(Document::new(
                Some("Korean".to_string()),
                "I took the bus.".to_string(),
                "docs/a.html".to_string(),
            )),
            Err(Error::Custom("broken".to_string())),
            Ok(Document::new(None, String::new(), "b.html".to_string())),
        ];
        let extractors =
            Extractors::from_config(&FeatureConfig::preset(SchemaVersion::V1)).unwrap();
        let mut out = Vec::new();
        let written =
            Inspect::write_records(docs.into_iter(), &extractors, &Toolkit::new(), &mut out)
                .unwrap();
        assert_eq!(written, 2);

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["filename"], "docs/a.html");
        assert_eq!(lines[0]["label"], "Asian");
        assert_eq!(lines[0]["features"]["transport_words"], true);
        assert!(lines[1]["label_source"].is_null());
        assert!(lines[1]["label"].is_null());
        assert_eq!(lines[1]["features"]["article_ratio"], 0.0);
    }
}
