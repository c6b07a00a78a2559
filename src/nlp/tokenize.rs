/*! Tokenization and sentence segmentation.

Three views of a text are used by the feature extractors:

- [Tokenizer::words]: linguistic tokens (Unicode word boundaries), lowercased,
  punctuation kept as tokens and whitespace dropped. This is what gets POS-tagged.
- [Tokenizer::word_char_runs]: maximal runs of word characters (letters, digits, underscore)
  of the lowercased text. Used for token statistics.
- [Tokenizer::sentences]: Unicode sentence boundaries, each sentence being its list of
  non-whitespace tokens. Sentences without tokens are dropped.
!*/
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Default, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased linguistic tokens.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_word_bounds()
            .filter(|token| !is_space(token))
            .map(normalize_apostrophe)
            .collect()
    }

    /// Lowercased runs of word characters.
    pub fn word_char_runs(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !is_word_char(c))
            .filter(|run| !run.is_empty())
            .map(String::from)
            .collect()
    }

    /// Sentences, as their non-whitespace tokens (original casing).
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<Vec<&'a str>> {
        text.unicode_sentences()
            .map(|sentence| {
                sentence
                    .split_word_bounds()
                    .filter(|token| !is_space(token))
                    .collect::<Vec<_>>()
            })
            .filter(|tokens| !tokens.is_empty())
            .collect()
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
fn is_space(token: &str) -> bool {
    token.chars().all(char::is_whitespace)
}

/// Typographic apostrophes are common in the corpus (`don’t`),
/// lexicons only know the ASCII one.
fn normalize_apostrophe(token: &str) -> String {
    token.replace('\u{2019}', "'")
}
