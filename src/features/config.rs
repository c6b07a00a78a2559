/*! Feature schema configuration

A run declares exactly one schema: a [SchemaVersion] preset, optionally altered by [Overrides].

| version | families | sentence count | dispersion | long sentences | richness |
|---|---|---|---|---|---|
| `v1` | lexicon, pos | | | | |
| `v2` | lexicon, pos, sentence, token | `sent_count` | `std_sent_len_tokens` | `> 20` tokens | `type_token_ratio` |
| `v3` | lexicon, pos, first_person, sentence, token | `sent_per_100_tokens` | `sent_cv_log` | | `unique_lemma_ratio` |

A JSON file can hold the whole configuration:

```json
{ "schema": "v2", "richness": "herdan_c", "long_sentence_threshold": 30 }
```
!*/
use std::{fmt, fs::File, io::BufReader, path::Path, str::FromStr};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Independently enabled feature family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Lexicon,
    Pos,
    FirstPerson,
    Sentence,
    Token,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Lexicon => "lexicon",
            Family::Pos => "pos",
            Family::FirstPerson => "first_person",
            Family::Sentence => "sentence",
            Family::Token => "token",
        }
    }
}

impl FromStr for Family {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexicon" => Ok(Family::Lexicon),
            "pos" => Ok(Family::Pos),
            "first_person" => Ok(Family::FirstPerson),
            "sentence" => Ok(Family::Sentence),
            "token" => Ok(Family::Token),
            other => Err(Error::Config(format!("unknown feature family {:?}", other))),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the number of sentences is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceCount {
    /// `sent_count`
    Raw,
    /// `sent_per_100_tokens`
    Per100Tokens,
}

impl FromStr for SentenceCount {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(SentenceCount::Raw),
            "per_100_tokens" => Ok(SentenceCount::Per100Tokens),
            other => Err(Error::Config(format!("unknown sentence count {:?}", other))),
        }
    }
}

/// Sentence length dispersion measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispersion {
    /// `std_sent_len_tokens`, population standard deviation.
    Std,
    /// `sent_cv_log`, `ln(1 + std / mean)`.
    CvLog,
}

impl FromStr for Dispersion {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "std" => Ok(Dispersion::Std),
            "cv_log" => Ok(Dispersion::CvLog),
            other => Err(Error::Config(format!("unknown dispersion {:?}", other))),
        }
    }
}

/// Lexical richness measure. Exactly one is emitted by the token family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Richness {
    TypeToken,
    UniqueLemma,
    HerdanC,
}

impl FromStr for Richness {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type_token" => Ok(Richness::TypeToken),
            "unique_lemma" => Ok(Richness::UniqueLemma),
            "herdan_c" => Ok(Richness::HerdanC),
            other => Err(Error::Config(format!("unknown richness measure {:?}", other))),
        }
    }
}

/// Schema presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    V1,
    V2,
    V3,
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::V3
    }
}

impl FromStr for SchemaVersion {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" | "1" => Ok(SchemaVersion::V1),
            "v2" | "2" => Ok(SchemaVersion::V2),
            "v3" | "3" => Ok(SchemaVersion::V3),
            other => Err(Error::Config(format!(
                "unknown schema version {:?} (expected v1, v2 or v3)",
                other
            ))),
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SchemaVersion::V1 => "v1",
            SchemaVersion::V2 => "v2",
            SchemaVersion::V3 => "v3",
        };
        f.write_str(s)
    }
}

/// Changes applied on top of a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub families: Option<Vec<Family>>,
    pub sentence_count: Option<SentenceCount>,
    pub dispersion: Option<Dispersion>,
    pub long_sentence_threshold: Option<usize>,
    pub richness: Option<Richness>,
}

/// Resolved feature schema of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub schema: SchemaVersion,
    pub families: Vec<Family>,
    pub sentence_count: SentenceCount,
    pub dispersion: Dispersion,
    pub long_sentence_threshold: Option<usize>,
    pub richness: Richness,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self::preset(SchemaVersion::default())
    }
}

/// On-disk form: a preset name plus overrides, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    schema: SchemaVersion,
    #[serde(flatten)]
    overrides: Overrides,
}

impl FeatureConfig {
    pub fn preset(schema: SchemaVersion) -> Self {
        match schema {
            SchemaVersion::V1 => Self {
                schema,
                families: vec![Family::Lexicon, Family::Pos],
                sentence_count: SentenceCount::Per100Tokens,
                dispersion: Dispersion::CvLog,
                long_sentence_threshold: None,
                richness: Richness::UniqueLemma,
            },
            SchemaVersion::V2 => Self {
                schema,
                families: vec![Family::Lexicon, Family::Pos, Family::Sentence, Family::Token],
                sentence_count: SentenceCount::Raw,
                dispersion: Dispersion::Std,
                long_sentence_threshold: Some(20),
                richness: Richness::TypeToken,
            },
            SchemaVersion::V3 => Self {
                schema,
                families: vec![
                    Family::Lexicon,
                    Family::Pos,
                    Family::FirstPerson,
                    Family::Sentence,
                    Family::Token,
                ],
                sentence_count: SentenceCount::Per100Tokens,
                dispersion: Dispersion::CvLog,
                long_sentence_threshold: None,
                richness: Richness::UniqueLemma,
            },
        }
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(families) = &overrides.families {
            self.families = families.clone();
        }
        if let Some(sentence_count) = overrides.sentence_count {
            self.sentence_count = sentence_count;
        }
        if let Some(dispersion) = overrides.dispersion {
            self.dispersion = dispersion;
        }
        if let Some(threshold) = overrides.long_sentence_threshold {
            self.long_sentence_threshold = Some(threshold);
        }
        if let Some(richness) = overrides.richness {
            self.richness = richness;
        }
        self
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let file: ConfigFile = serde_json::from_reader(reader)?;
        let config = Self::preset(file.schema).with_overrides(&file.overrides);
        info!("loaded feature configuration {:?} from {:?}", config, path);
        Ok(config)
    }

    pub fn has_family(&self, family: Family) -> bool {
        self.families.contains(&family)
    }
}
