//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::error::Error;
use crate::features::config::{Dispersion, Family, Richness, SentenceCount};
use crate::features::{FeatureConfig, Overrides, SchemaVersion};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lang8-features",
    about = "Feature extraction for native language family classification on Lang-8."
)]
/// Holds every command that is callable by the `lang8-features` command.
pub enum Lang8 {
    #[structopt(about = "Build train/dev/test feature tables")]
    Build(Build),
    #[structopt(about = "Print labels and features of every document of an archive")]
    Inspect(Inspect),
}

/// Feature schema options, shared by subcommands.
#[derive(Debug, StructOpt)]
pub struct Schema {
    #[structopt(
        long = "schema",
        conflicts_with = "config",
        help = "feature schema preset (v1, v2, v3), v3 if neither this nor --config is set"
    )]
    pub schema: Option<SchemaVersion>,
    #[structopt(
        long = "config",
        parse(from_os_str),
        help = "JSON feature configuration file"
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        long = "families",
        use_delimiter = true,
        help = "comma separated feature families (lexicon, pos, first_person, sentence, token)"
    )]
    pub families: Option<Vec<Family>>,
    #[structopt(
        long = "richness",
        help = "lexical richness measure (type_token, unique_lemma, herdan_c)"
    )]
    pub richness: Option<Richness>,
    #[structopt(long = "sentence-count", help = "sentence count form (raw, per_100_tokens)")]
    pub sentence_count: Option<SentenceCount>,
    #[structopt(long = "dispersion", help = "sentence length dispersion (std, cv_log)")]
    pub dispersion: Option<Dispersion>,
    #[structopt(
        long = "long-sentence-threshold",
        help = "emit prop_long_sents, the share of sentences longer than this many tokens"
    )]
    pub long_sentence_threshold: Option<usize>,
}

impl Schema {
    /// Resolve the feature configuration.
    ///
    /// The base is the configuration file or the `--schema` preset,
    /// individual options are applied on top of it.
    pub fn resolve(&self) -> Result<FeatureConfig, Error> {
        let base = match (&self.config, self.schema) {
            (Some(path), _) => FeatureConfig::from_json_path(path)?,
            (None, Some(version)) => FeatureConfig::preset(version),
            (None, None) => FeatureConfig::default(),
        };
        let overrides = Overrides {
            families: self.families.clone(),
            sentence_count: self.sentence_count,
            dispersion: self.dispersion,
            long_sentence_threshold: self.long_sentence_threshold,
            richness: self.richness,
        };
        Ok(base.with_overrides(&overrides))
    }
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
pub struct Build {
    #[structopt(parse(from_os_str), help = "Lang-8 zip archive")]
    pub archive: PathBuf,
    #[structopt(parse(from_os_str), help = "train manifest")]
    pub train: PathBuf,
    #[structopt(parse(from_os_str), help = "dev manifest")]
    pub dev: PathBuf,
    #[structopt(parse(from_os_str), help = "test manifest")]
    pub test: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub schema: Schema,
    #[structopt(long = "sequential", help = "extract features on a single thread")]
    pub sequential: bool,
    #[structopt(
        long = "chunk_size",
        short = "s",
        default_value = "256",
        help = "number of documents extracted concurrently"
    )]
    pub chunk_size: usize,
}

#[derive(Debug, StructOpt)]
/// Inspect command and parameters.
pub struct Inspect {
    #[structopt(parse(from_os_str), help = "Lang-8 zip archive")]
    pub archive: PathBuf,
    #[structopt(flatten)]
    pub schema: Schema,
}
