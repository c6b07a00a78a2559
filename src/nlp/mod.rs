/*! NLP toolkit

Tokenizer, part-of-speech tagger and lemmatizer shared by every feature extractor.

The [Toolkit] is built once by the caller and borrowed by extractors,
there is no global state.
!*/
mod lemmatizer;
mod tagger;
mod tokenize;

pub use lemmatizer::Lemmatizer;
pub use tagger::{LexiconTagger, Tag, Tagger};
pub use tokenize::Tokenizer;

/// Shared NLP resources.
pub struct Toolkit {
    tokenizer: Tokenizer,
    tagger: Box<dyn Tagger + Send + Sync>,
    lemmatizer: Lemmatizer,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolkit {
    /// Build the default toolkit, using a [LexiconTagger].
    pub fn new() -> Self {
        Self::with_tagger(Box::<LexiconTagger>::default())
    }

    /// Build a toolkit around another tagger.
    pub fn with_tagger(tagger: Box<dyn Tagger + Send + Sync>) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            tagger,
            lemmatizer: Lemmatizer::new(),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    /// Tokenize (lowercased linguistic tokens) and tag a text.
    pub fn tag(&self, text: &str) -> Vec<(String, Tag)> {
        let tokens = self.tokenizer.words(text);
        let tags = self.tagger.tag(&tokens);
        tokens.into_iter().zip(tags).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, Tagger, Toolkit};

    struct NounTagger;
    impl Tagger for NounTagger {
        fn tag(&self, tokens: &[String]) -> Vec<Tag> {
            vec![Tag::NN; tokens.len()]
        }
    }

    #[test]
    fn tag_pairs() {
        let tk = Toolkit::new();
        let tagged = tk.tag("The cat sat.");
        let words: Vec<&str> = tagged.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["the", "cat", "sat", "."]);
        assert_eq!(tagged[0].1, Tag::DT);
        assert_eq!(tagged[3].1, Tag::Punct);
    }

    #[test]
    fn custom_tagger() {
        let tk = Toolkit::with_tagger(Box::new(NounTagger));
        assert!(tk.tag("the a an").iter().all(|(_, t)| *t == Tag::NN));
    }

    #[test]
    fn empty() {
        assert!(Toolkit::new().tag("  ").is_empty());
    }
}
