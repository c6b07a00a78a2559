//! Part-of-speech ratios.
//!
//! Counts of some tag classes over the total number of linguistic tokens (punctuation included).
use super::{ratio, Extract, Features};
use crate::nlp::{Tag, Toolkit};

const ARTICLES: &[&str] = &["a", "an", "the"];

const KEYS: [&str; 5] = [
    "article_ratio",
    "pronoun_density",
    "preposition_ratio",
    "modal_verb_ratio",
    "adjective_ratio",
];

#[derive(Debug, Default, Clone)]
pub struct PosRatios;

impl Extract for PosRatios {
    fn name(&self) -> &'static str {
        "pos"
    }

    fn keys(&self) -> Vec<&'static str> {
        KEYS.to_vec()
    }

    fn extract(&self, text: &str, toolkit: &Toolkit) -> Features {
        let tagged = toolkit.tag(text);
        let total = tagged.len();
        let count = |pred: fn(&str, Tag) -> bool| {
            tagged.iter().filter(|(w, t)| pred(w, *t)).count()
        };

        let articles = count(|w, t| t == Tag::DT && ARTICLES.contains(&w));
        let pronouns = count(|_, t| t.is_pronoun());
        let prepositions = count(|_, t| t == Tag::IN);
        let modals = count(|_, t| t == Tag::MD);
        let adjectives = count(|_, t| t.is_adjective());

        let mut features = Features::new();
        features.insert("article_ratio", ratio(articles, total));
        features.insert("pronoun_density", ratio(pronouns, total));
        features.insert("preposition_ratio", ratio(prepositions, total));
        features.insert("modal_verb_ratio", ratio(modals, total));
        features.insert("adjective_ratio", ratio(adjectives, total));
        features
    }
}
