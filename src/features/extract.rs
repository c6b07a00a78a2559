//! Extract trait and extractor registry.
use std::collections::HashSet;

use log::debug;

use super::config::{Family, FeatureConfig};
use super::{FirstPerson, Lexicon, PosRatios, SentenceStats, TokenStats};
use crate::error::Error;
use crate::features::Features;
use crate::nlp::Toolkit;

/// A feature family: maps a text to a fixed set of named features.
///
/// Implementors must return the same keys (the ones of [Extract::keys]) for every input,
/// and `0.0`/`false` values for empty or whitespace-only text.
pub trait Extract {
    fn name(&self) -> &'static str;
    fn keys(&self) -> Vec<&'static str>;
    fn extract(&self, text: &str, toolkit: &Toolkit) -> Features;
}

/// Registry of feature families, extracting them all in one step.
///
/// Two families emitting the same key can't be registered together.
#[derive(Default)]
pub struct Extractors {
    extractors: Vec<Box<dyn Extract + Send + Sync>>,
    keys: HashSet<&'static str>,
}

impl Extractors {
    /// Build the registry of a feature configuration.
    pub fn from_config(config: &FeatureConfig) -> Result<Self, Error> {
        let mut registry = Self::default();
        for family in &config.families {
            let extractor: Box<dyn Extract + Send + Sync> = match family {
                Family::Lexicon => Box::<Lexicon>::default(),
                Family::Pos => Box::<PosRatios>::default(),
                Family::FirstPerson => Box::<FirstPerson>::default(),
                Family::Sentence => Box::new(SentenceStats::new(
                    config.sentence_count,
                    config.dispersion,
                    config.long_sentence_threshold,
                )),
                Family::Token => Box::new(TokenStats::new(config.richness)),
            };
            registry.add(extractor)?;
        }
        debug!("feature registry: {:?}", registry.names());
        Ok(registry)
    }

    /// Register a family, refusing it if one of its keys is already emitted.
    pub fn add(&mut self, extractor: Box<dyn Extract + Send + Sync>) -> Result<&mut Self, Error> {
        let keys = extractor.keys();
        if let Some(key) = keys.iter().find(|key| self.keys.contains(*key)) {
            return Err(Error::Config(format!(
                "feature {:?} of family {} is already emitted by another family",
                key,
                extractor.name()
            )));
        }
        self.keys.extend(keys);
        self.extractors.push(extractor);
        Ok(self)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Extract for Extractors {
    fn name(&self) -> &'static str {
        "registry"
    }

    /// Every key of the schema, sorted.
    fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.keys.iter().copied().collect();
        keys.sort_unstable();
        keys
    }

    fn extract(&self, text: &str, toolkit: &Toolkit) -> Features {
        let mut features = Features::new();
        for extractor in &self.extractors {
            features.merge(extractor.extract(text, toolkit));
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::{Extract, Extractors};
    use crate::features::config::{Family, FeatureConfig, Overrides, SchemaVersion};
    use crate::features::Features;
    use crate::nlp::Toolkit;

    struct Clashing;
    impl Extract for Clashing {
        fn name(&self) -> &'static str {
            "clashing"
        }
        fn keys(&self) -> Vec<&'static str> {
            vec!["article_ratio"]
        }
        fn extract(&self, _: &str, _: &Toolkit) -> Features {
            let mut f = Features::new();
            f.insert("article_ratio", 1.0);
            f
        }
    }

    #[test]
    fn presets_keys() {
        let v1 = Extractors::from_config(&FeatureConfig::preset(SchemaVersion::V1)).unwrap();
        assert_eq!(v1.keys().len(), 10);

        let v2 = Extractors::from_config(&FeatureConfig::preset(SchemaVersion::V2)).unwrap();
        let keys = v2.keys();
        assert_eq!(keys.len(), 18);
        for key in ["sent_count", "std_sent_len_tokens", "prop_long_sents", "type_token_ratio"] {
            assert!(keys.contains(&key), "{}", key);
        }

        let v3 = Extractors::from_config(&FeatureConfig::preset(SchemaVersion::V3)).unwrap();
        let keys = v3.keys();
        assert_eq!(keys.len(), 18);
        for key in ["first_person_ratio", "sent_per_100_tokens", "sent_cv_log", "unique_lemma_ratio"] {
            assert!(keys.contains(&key), "{}", key);
        }
    }

    #[test]
    fn extracted_keys_match_declared() {
        let tk = Toolkit::new();
        let registry = Extractors::from_config(&FeatureConfig::default()).unwrap();
        for text in ["", "   ", "I love Tokyo. It is a big city!"] {
            let f = registry.extract(text, &tk);
            assert_eq!(f.keys().collect::<Vec<_>>(), registry.keys());
        }
    }

    #[test]
    fn duplicate_family_is_refused() {
        let o = Overrides {
            families: Some(vec![Family::Pos, Family::Pos]),
            ..Default::default()
        };
        let config = FeatureConfig::default().with_overrides(&o);
        assert!(Extractors::from_config(&config).is_err());
    }

    #[test]
    fn colliding_keys_are_refused() {
        let mut registry =
            Extractors::from_config(&FeatureConfig::preset(SchemaVersion::V1)).unwrap();
        assert!(registry.add(Box::new(Clashing)).is_err());
        assert_eq!(registry.names(), vec!["lexicon", "pos"]);
    }

    #[test]
    fn empty_registry() {
        let o = Overrides {
            families: Some(vec![]),
            ..Default::default()
        };
        let registry = Extractors::from_config(&FeatureConfig::default().with_overrides(&o)).unwrap();
        assert!(registry.is_empty());
        assert!(registry.extract("text", &Toolkit::new()).is_empty());
    }
}
