/*! Token statistics

Tokens here are the runs of word characters of the lowercased text.

- one lexical richness measure (`type_token_ratio`, `unique_lemma_ratio` or `herdan_c`),
- `hapax_ratio`: types occurring once, over the number of tokens,
- `mean_word_len`: letters per token,
- `punct_per_token`: ASCII punctuation characters of the raw text per token.
!*/
use std::collections::{HashMap, HashSet};

use super::config::Richness;
use super::{ratio, Extract, Features};
use crate::nlp::Toolkit;

#[derive(Debug, Clone)]
pub struct TokenStats {
    richness: Richness,
}

impl Default for TokenStats {
    fn default() -> Self {
        Self::new(Richness::UniqueLemma)
    }
}

impl TokenStats {
    pub fn new(richness: Richness) -> Self {
        Self { richness }
    }

    fn richness_key(&self) -> &'static str {
        match self.richness {
            Richness::TypeToken => "type_token_ratio",
            Richness::UniqueLemma => "unique_lemma_ratio",
            Richness::HerdanC => "herdan_c",
        }
    }

    fn richness(&self, tokens: &[String], types: usize, toolkit: &Toolkit) -> f64 {
        match self.richness {
            Richness::TypeToken => ratio(types, tokens.len()),
            Richness::UniqueLemma => {
                let lemmatizer = toolkit.lemmatizer();
                let lemmas: HashSet<_> = tokens.iter().map(|t| lemmatizer.lemmatize(t)).collect();
                ratio(lemmas.len(), tokens.len())
            }
            Richness::HerdanC if types > 1 && tokens.len() > 1 => {
                (types as f64).ln() / (tokens.len() as f64).ln()
            }
            Richness::HerdanC => 0.0,
        }
    }
}

impl Extract for TokenStats {
    fn name(&self) -> &'static str {
        "token"
    }

    fn keys(&self) -> Vec<&'static str> {
        vec![
            self.richness_key(),
            "hapax_ratio",
            "mean_word_len",
            "punct_per_token",
        ]
    }

    fn extract(&self, text: &str, toolkit: &Toolkit) -> Features {
        let tokens = toolkit.tokenizer().word_char_runs(text);
        let total = tokens.len();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            *counts.entry(token.as_str()).or_default() += 1;
        }
        let hapaxes = counts.values().filter(|c| **c == 1).count();
        let letters: usize = tokens
            .iter()
            .map(|t| t.chars().filter(|c| c.is_alphabetic()).count())
            .sum();
        let punctuation = text.chars().filter(char::is_ascii_punctuation).count();

        let mut features = Features::new();
        features.insert(self.richness_key(), self.richness(&tokens, counts.len(), toolkit));
        features.insert("hapax_ratio", ratio(hapaxes, total));
        features.insert("mean_word_len", ratio(letters, total));
        features.insert("punct_per_token", ratio(punctuation, total));
        features
    }
}
