/*! Lexicon presence features

Boolean features telling whether words of small hand-picked lexicons appear in a text.

- `has_romance_cognates`: formal discourse connectives, closer to Romance vocabulary.
- `transport_words`: everyday transport vocabulary.
- `hedging_words`: hedges, including the `kind of`/`sort of` bigrams.
- `asian_top_word_match`: at least two of the three most frequent nouns are Asian places or nationalities.
- `religious_feature`: religious vocabulary.
!*/
use std::collections::HashMap;

use super::{Extract, Features};
use crate::nlp::Toolkit;

const ROMANCE_COGNATES: &[&str] = &[
    "consequently",
    "therefore",
    "however",
    "nevertheless",
    "furthermore",
    "moreover",
    "additionally",
    "alternatively",
    "specifically",
    "particularly",
];

const TRANSPORT: &[&str] = &["taxi", "train", "bus", "bicycle", "subway", "metro", "bike"];

const HEDGES: &[&str] = &[
    "maybe",
    "perhaps",
    "possibly",
    "probably",
    "might",
    "seem",
    "appear",
    "somewhat",
    "relatively",
    "fairly",
    "rather",
];

const HEDGE_BIGRAMS: &[(&str, &str)] = &[("kind", "of"), ("sort", "of")];

const ASIAN: &[&str] = &[
    "china", "chinese", "korea", "korean", "japan", "japanese", "tokyo", "beijing", "shanghai",
    "seoul",
];

const RELIGIOUS: &[&str] = &[
    "catholic", "christ", "god", "church", "pray", "angel", "holy", "spirit", "devil",
];

const KEYS: [&str; 5] = [
    "has_romance_cognates",
    "transport_words",
    "hedging_words",
    "asian_top_word_match",
    "religious_feature",
];

/// Number of most frequent nouns looked at.
const TOP_NOUNS: usize = 3;
/// Minimum number of them that have to be in the Asian lexicon.
const MIN_ASIAN_MATCHES: usize = 2;

#[derive(Debug, Default, Clone)]
pub struct Lexicon;

impl Lexicon {
    /// Most frequent nouns, ties broken by first occurrence.
    fn top_nouns<'a>(tagged: &'a [(String, crate::nlp::Tag)], n: usize) -> Vec<&'a str> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (word, _) in tagged.iter().filter(|(_, tag)| tag.is_noun()) {
            match index.get(word.as_str()) {
                Some(idx) => counts[*idx].1 += 1,
                None => {
                    index.insert(word.as_str(), counts.len());
                    counts.push((word.as_str(), 1));
                }
            }
        }
        // stable: equal counts keep first occurrence order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().take(n).map(|(word, _)| word).collect()
    }
}

impl Extract for Lexicon {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn keys(&self) -> Vec<&'static str> {
        KEYS.to_vec()
    }

    fn extract(&self, text: &str, toolkit: &Toolkit) -> Features {
        let tagged = toolkit.tag(text);
        let words: Vec<&str> = tagged.iter().map(|(w, _)| w.as_str()).collect();
        let any_in = |lexicon: &[&str]| words.iter().any(|w| lexicon.contains(w));

        let hedging = any_in(HEDGES)
            || words
                .windows(2)
                .any(|pair| HEDGE_BIGRAMS.contains(&(pair[0], pair[1])));

        let asian_matches = Self::top_nouns(&tagged, TOP_NOUNS)
            .into_iter()
            .filter(|noun| ASIAN.contains(noun))
            .count();

        let mut features = Features::new();
        features.insert("has_romance_cognates", any_in(ROMANCE_COGNATES));
        features.insert("transport_words", any_in(TRANSPORT));
        features.insert("hedging_words", hedging);
        features.insert("asian_top_word_match", asian_matches >= MIN_ASIAN_MATCHES);
        features.insert("religious_feature", any_in(RELIGIOUS));
        features
    }
}

#[cfg(test)]
mod tests {
    use super::{Extract, Lexicon};
    use crate::features::{FeatureValue, Features};
    use crate::nlp::{Tag, Toolkit};

    fn extract(text: &str) -> Features {
        Lexicon.extract(text, &Toolkit::new())
    }

    fn flag(f: &Features, key: &str) -> bool {
        matches!(f.get(key), Some(FeatureValue::Bool(true)))
    }

    #[test]
    fn empty_is_all_false() {
        for text in ["", " \n\t "] {
            let f = extract(text);
            assert_eq!(f.len(), 5);
            assert!(f.iter().all(|(_, v)| *v == FeatureValue::Bool(false)));
        }
    }

    #[test]
    fn cognates_case_insensitive() {
        assert!(flag(&extract("However, I stayed."), "has_romance_cognates"));
        assert!(!flag(&extract("But I stayed."), "has_romance_cognates"));
    }

    #[test]
    fn transport() {
        assert!(flag(&extract("I took the Subway."), "transport_words"));
        assert!(!flag(&extract("I walked."), "transport_words"));
    }

    #[test]
    fn hedging() {
        assert!(flag(&extract("Maybe tomorrow."), "hedging_words"));
        assert!(flag(&extract("It was kind of fun."), "hedging_words"));
        assert!(flag(&extract("It was sort of fun."), "hedging_words"));
        assert!(!flag(&extract("What kind is it? Of course."), "hedging_words"));
        assert!(!flag(&extract("It was fun."), "hedging_words"));
    }

    #[test]
    fn religious() {
        let f = extract("I went to church and I pray every day. God is important to me.");
        assert!(flag(&f, "religious_feature"));
        assert!(!flag(&extract("I went to school today."), "religious_feature"));
    }

    #[test]
    fn asian_top_words() {
        let f = extract("Tokyo is great. Tokyo has food. Japan is big. Japan and Tokyo and the city.");
        assert!(flag(&f, "asian_top_word_match"));

        let f = extract("I went to school today. The weather was nice. My friends were happy.");
        assert!(!flag(&f, "asian_top_word_match"));
    }

    #[test]
    fn asian_language_names_count_as_nouns() {
        let f = extract(
            "I study Korean. Korean is hard. I also study Chinese. \
             Chinese is harder than Korean. My teacher is nice.",
        );
        assert!(flag(&f, "asian_top_word_match"));
    }

    #[test]
    fn asian_needs_two_of_top_three() {
        // school, weather, friends outnumber the single Asian noun
        let f = extract("school school weather weather friend friend tokyo");
        assert!(!flag(&f, "asian_top_word_match"));
    }

    #[test]
    fn top_nouns_tie_order() {
        let tagged: Vec<(String, Tag)> = ["cat", "dog", "bird", "dog", "fish", "cat", "eel"]
            .iter()
            .map(|w| (w.to_string(), Tag::NN))
            .collect();
        assert_eq!(Lexicon::top_nouns(&tagged, 3), vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn top_nouns_ignore_other_tags() {
        let tagged = vec![
            ("the".to_string(), Tag::DT),
            ("the".to_string(), Tag::DT),
            ("cat".to_string(), Tag::NN),
        ];
        assert_eq!(Lexicon::top_nouns(&tagged, 3), vec!["cat"]);
    }
}
