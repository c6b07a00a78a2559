//! Rule based English lemmatizer.
//!
//! Irregular forms come from a table, regular plurals and third person `-s` forms are stripped.
//! Tokens are expected lowercased.
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

const IRREGULARS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("halves", "half"),
];

/// Words ending in `s` that are already lemmas.
const INVARIANTS: &[&str] = &[
    "this", "his", "its", "yes", "always", "news", "series", "species", "physics",
    "mathematics", "economics", "christmas", "perhaps", "sometimes", "towards", "besides",
    "whereas", "thus", "plus", "less", "unless", "ourselves", "themselves", "yourselves",
];

const SIBILANT_PLURALS: &[&str] = &["sses", "shes", "ches", "xes", "zes"];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregulars: HashMap<&'static str, &'static str>,
    invariants: HashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self {
            irregulars: IRREGULARS.iter().copied().collect(),
            invariants: INVARIANTS.iter().copied().collect(),
        }
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lemmatize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        if let Some(lemma) = self.irregulars.get(token) {
            return Cow::Borrowed(*lemma);
        }
        if token.chars().count() <= 3
            || self.invariants.contains(token)
            || token.ends_with("ss")
            || token.ends_with("us")
            || token.ends_with("is")
        {
            return Cow::Borrowed(token);
        }

        if let Some(stem) = token.strip_suffix("ies") {
            Cow::Owned(format!("{}y", stem))
        } else if SIBILANT_PLURALS.iter().any(|suffix| token.ends_with(suffix)) {
            Cow::Borrowed(&token[..token.len() - 2])
        } else if let Some(stem) = token.strip_suffix('s') {
            Cow::Borrowed(stem)
        } else {
            Cow::Borrowed(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lemmatizer;

    #[test]
    fn regular_plurals() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize("dogs"), "dog");
        assert_eq!(l.lemmatize("cities"), "city");
        assert_eq!(l.lemmatize("classes"), "class");
        assert_eq!(l.lemmatize("churches"), "church");
        assert_eq!(l.lemmatize("boxes"), "box");
        assert_eq!(l.lemmatize("studies"), "study");
    }

    #[test]
    fn irregulars() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize("children"), "child");
        assert_eq!(l.lemmatize("was"), "be");
        assert_eq!(l.lemmatize("went"), "go");
        assert_eq!(l.lemmatize("people"), "person");
    }

    #[test]
    fn invariants() {
        let l = Lemmatizer::new();
        for word in ["this", "his", "bus", "glass", "analysis", "news", "is", "us", "a", ""] {
            assert_eq!(l.lemmatize(word), word, "{}", word);
        }
    }

    #[test]
    fn non_plurals_untouched() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize("hello"), "hello");
        assert_eq!(l.lemmatize("world"), "world");
    }
}
