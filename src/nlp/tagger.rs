/*! Part-of-speech tagging

Tags follow the Penn Treebank tagset.

[LexiconTagger] is a closed-class lexicon plus suffix heuristics, with a couple of
contextual corrections. It is tuned for what the features need: determiners, pronouns,
prepositions, modals and adjectives are mostly closed or suffix-marked classes,
nouns are everything that is left.
!*/
use std::collections::HashMap;

use unic_ucd::GeneralCategory;

/// Penn Treebank tags.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    CC,
    CD,
    DT,
    EX,
    IN,
    JJ,
    JJR,
    JJS,
    MD,
    NN,
    NNS,
    PDT,
    PRP,
    /// `PRP$`
    PRPS,
    RB,
    RBR,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    /// `WP$`
    WPS,
    WRB,
    /// Punctuation
    Punct,
    Sym,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::CC => "CC",
            Tag::CD => "CD",
            Tag::DT => "DT",
            Tag::EX => "EX",
            Tag::IN => "IN",
            Tag::JJ => "JJ",
            Tag::JJR => "JJR",
            Tag::JJS => "JJS",
            Tag::MD => "MD",
            Tag::NN => "NN",
            Tag::NNS => "NNS",
            Tag::PDT => "PDT",
            Tag::PRP => "PRP",
            Tag::PRPS => "PRP$",
            Tag::RB => "RB",
            Tag::RBR => "RBR",
            Tag::TO => "TO",
            Tag::UH => "UH",
            Tag::VB => "VB",
            Tag::VBD => "VBD",
            Tag::VBG => "VBG",
            Tag::VBN => "VBN",
            Tag::VBP => "VBP",
            Tag::VBZ => "VBZ",
            Tag::WDT => "WDT",
            Tag::WP => "WP",
            Tag::WPS => "WP$",
            Tag::WRB => "WRB",
            Tag::Punct => ".",
            Tag::Sym => "SYM",
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, Tag::NN | Tag::NNS)
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, Tag::JJ | Tag::JJR | Tag::JJS)
    }

    /// Personal and possessive pronouns.
    pub fn is_pronoun(&self) -> bool {
        matches!(self, Tag::PRP | Tag::PRPS)
    }
}

/// Assigns a tag to each token of a tokenized, lowercased text.
pub trait Tagger {
    fn tag(&self, tokens: &[String]) -> Vec<Tag>;
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "these", "those", "every", "each", "some", "any", "no",
    "another", "either", "neither", "both",
];

const PREDETERMINERS: &[&str] = &["all", "half", "such"];

const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
    "mine", "yours", "hers", "ours", "theirs", "i'm", "i've", "i'll", "i'd", "it's",
    "he's", "she's", "you're", "we're", "they're", "you've", "we've", "they've",
];

const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "despite", "during", "except", "for", "from", "in", "inside", "into", "like", "near",
    "of", "off", "on", "onto", "out", "outside", "over", "per", "since", "through",
    "throughout", "till", "toward", "towards", "under", "underneath", "unlike", "until",
    "upon", "via", "with", "within", "without", "because", "although", "though", "while",
    "whether", "if", "than", "that", "as", "unless", "whereas",
];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
    "cannot", "can't", "couldn't", "won't", "wouldn't", "shouldn't", "mustn't", "'ll", "'d",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "plus", "&"];

const WH_WORDS: &[(&str, Tag)] = &[
    ("which", Tag::WDT),
    ("whatever", Tag::WDT),
    ("what", Tag::WP),
    ("who", Tag::WP),
    ("whom", Tag::WP),
    ("whoever", Tag::WP),
    ("whose", Tag::WPS),
    ("when", Tag::WRB),
    ("where", Tag::WRB),
    ("why", Tag::WRB),
    ("how", Tag::WRB),
];

const INTERJECTIONS: &[&str] = &[
    "oh", "wow", "yes", "yeah", "hello", "hi", "hey", "ok", "okay", "ah", "um", "oops",
    "bye", "thanks",
];

const ADVERBS: &[&str] = &[
    "not", "n't", "very", "also", "too", "just", "so", "really", "always", "never", "often",
    "sometimes", "usually", "already", "still", "now", "then", "here", "again", "even",
    "only", "well", "soon", "yet", "ago", "almost", "quite", "maybe", "perhaps", "rather",
    "ever", "together", "however", "therefore", "moreover", "furthermore", "nevertheless",
    "consequently", "thus", "hence", "instead", "anyway", "away", "back", "once", "twice",
    "today", "tonight", "tomorrow", "yesterday", "abroad", "everywhere", "somewhere",
    "else", "indeed", "otherwise", "somewhat", "fairly", "pretty", "enough", "up", "down",
];

const COMPARATIVE_ADVERBS: &[&str] = &["more", "less"];

const NUMBERS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand",
    "million", "billion",
];

const VERBS: &[(&str, Tag)] = &[
    ("be", Tag::VB),
    ("am", Tag::VBP),
    ("is", Tag::VBZ),
    ("are", Tag::VBP),
    ("was", Tag::VBD),
    ("were", Tag::VBD),
    ("been", Tag::VBN),
    ("being", Tag::VBG),
    ("have", Tag::VBP),
    ("has", Tag::VBZ),
    ("had", Tag::VBD),
    ("do", Tag::VBP),
    ("does", Tag::VBZ),
    ("did", Tag::VBD),
    ("done", Tag::VBN),
    ("don't", Tag::VBP),
    ("doesn't", Tag::VBZ),
    ("didn't", Tag::VBD),
    ("isn't", Tag::VBZ),
    ("aren't", Tag::VBP),
    ("wasn't", Tag::VBD),
    ("weren't", Tag::VBD),
    ("haven't", Tag::VBP),
    ("hasn't", Tag::VBZ),
    ("go", Tag::VBP),
    ("goes", Tag::VBZ),
    ("went", Tag::VBD),
    ("gone", Tag::VBN),
    ("get", Tag::VBP),
    ("gets", Tag::VBZ),
    ("got", Tag::VBD),
    ("make", Tag::VBP),
    ("makes", Tag::VBZ),
    ("made", Tag::VBD),
    ("take", Tag::VBP),
    ("takes", Tag::VBZ),
    ("took", Tag::VBD),
    ("taken", Tag::VBN),
    ("come", Tag::VBP),
    ("comes", Tag::VBZ),
    ("came", Tag::VBD),
    ("see", Tag::VBP),
    ("sees", Tag::VBZ),
    ("saw", Tag::VBD),
    ("seen", Tag::VBN),
    ("know", Tag::VBP),
    ("knows", Tag::VBZ),
    ("knew", Tag::VBD),
    ("known", Tag::VBN),
    ("think", Tag::VBP),
    ("thinks", Tag::VBZ),
    ("thought", Tag::VBD),
    ("say", Tag::VBP),
    ("says", Tag::VBZ),
    ("said", Tag::VBD),
    ("tell", Tag::VBP),
    ("told", Tag::VBD),
    ("give", Tag::VBP),
    ("gave", Tag::VBD),
    ("given", Tag::VBN),
    ("find", Tag::VBP),
    ("found", Tag::VBD),
    ("want", Tag::VBP),
    ("wants", Tag::VBZ),
    ("feel", Tag::VBP),
    ("feels", Tag::VBZ),
    ("felt", Tag::VBD),
    ("become", Tag::VBP),
    ("became", Tag::VBD),
    ("keep", Tag::VBP),
    ("kept", Tag::VBD),
    ("begin", Tag::VBP),
    ("began", Tag::VBD),
    ("write", Tag::VBP),
    ("wrote", Tag::VBD),
    ("written", Tag::VBN),
    ("read", Tag::VBP),
    ("learn", Tag::VBP),
    ("study", Tag::VBP),
    ("use", Tag::VBP),
    ("try", Tag::VBP),
    ("tried", Tag::VBD),
    ("need", Tag::VBP),
    ("needs", Tag::VBZ),
    ("live", Tag::VBP),
    ("lives", Tag::VBZ),
    ("work", Tag::VBP),
    ("works", Tag::VBZ),
    ("play", Tag::VBP),
    ("eat", Tag::VBP),
    ("ate", Tag::VBD),
    ("eaten", Tag::VBN),
    ("drink", Tag::VBP),
    ("drank", Tag::VBD),
    ("buy", Tag::VBP),
    ("bought", Tag::VBD),
    ("watch", Tag::VBP),
    ("speak", Tag::VBP),
    ("spoke", Tag::VBD),
    ("spoken", Tag::VBN),
    ("hope", Tag::VBP),
    ("believe", Tag::VBP),
    ("understand", Tag::VBP),
    ("understood", Tag::VBD),
    ("help", Tag::VBP),
    ("start", Tag::VBP),
    ("meet", Tag::VBP),
    ("met", Tag::VBD),
    ("let", Tag::VBP),
    ("put", Tag::VBP),
    ("run", Tag::VBP),
    ("ran", Tag::VBD),
    ("sleep", Tag::VBP),
    ("slept", Tag::VBD),
    ("visit", Tag::VBP),
    ("enjoy", Tag::VBP),
    ("love", Tag::VBP),
    ("hate", Tag::VBP),
    ("ask", Tag::VBP),
    ("show", Tag::VBP),
    ("wait", Tag::VBP),
    ("walk", Tag::VBP),
    ("travel", Tag::VBP),
    ("stay", Tag::VBP),
    ("remember", Tag::VBP),
    ("forget", Tag::VBP),
    ("forgot", Tag::VBD),
    ("decide", Tag::VBP),
    ("seem", Tag::VBP),
    ("seems", Tag::VBZ),
    ("appear", Tag::VBP),
    ("appears", Tag::VBZ),
    ("bring", Tag::VBP),
    ("brought", Tag::VBD),
    ("teach", Tag::VBP),
    ("taught", Tag::VBD),
    ("pay", Tag::VBP),
    ("paid", Tag::VBD),
    ("send", Tag::VBP),
    ("sent", Tag::VBD),
    ("spend", Tag::VBP),
    ("spent", Tag::VBD),
    ("lose", Tag::VBP),
    ("lost", Tag::VBD),
    ("sit", Tag::VBP),
    ("sat", Tag::VBD),
    ("stand", Tag::VBP),
    ("stood", Tag::VBD),
    ("hear", Tag::VBP),
    ("heard", Tag::VBD),
    ("pray", Tag::VBP),
    ("leave", Tag::VBP),
    ("left", Tag::VBD),
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "big", "small", "great", "little", "long", "short", "high",
    "low", "young", "important", "different", "same", "other", "many", "much", "few",
    "last", "first", "next", "easy", "hard", "difficult", "happy", "sad", "nice", "beautiful",
    "interesting", "boring", "tired", "busy", "free", "real", "sure", "true", "right",
    "wrong", "whole", "own", "full", "hot", "cold", "warm", "cool", "english", "chinese",
    "japanese", "korean", "french", "spanish", "american", "european", "asian", "foreign",
    "native", "favorite", "popular", "famous", "delicious", "special", "possible",
    "impossible", "simple", "clear", "large", "huge", "fine", "early", "late", "poor",
    "rich", "cheap", "expensive", "strong", "weak", "able", "several", "various", "glad",
    "lucky", "funny", "crazy", "healthy", "angry", "lonely", "friendly", "ugly", "global",
    "international", "local", "social", "natural", "traditional", "cultural", "personal",
    "political", "economic", "final", "normal", "usual", "holy", "catholic", "main",
    "common", "public", "private", "general", "open", "close", "safe", "ready",
    "dear", "black", "white", "red", "blue", "green", "dark", "bright", "quiet", "loud",
    "fast", "slow", "excited", "exciting", "amazing", "surprised", "worried", "afraid",
    "relative", "toxic", "valuable", "clean",
];

const COMPARATIVES: &[&str] = &[
    "better", "worse", "bigger", "smaller", "larger", "older", "younger", "easier",
    "harder", "higher", "lower", "longer", "shorter", "faster", "cheaper", "earlier",
    "later", "happier", "greater", "richer", "poorer", "stronger", "weaker", "newer",
];

const SUPERLATIVES: &[&str] = &[
    "best", "worst", "most", "least", "biggest", "smallest", "largest", "oldest",
    "youngest", "easiest", "hardest", "highest", "longest", "shortest", "fastest",
    "cheapest", "happiest", "greatest", "strongest", "newest",
];

/// Singular nouns ending in `s`.
const NOUNS: &[&str] = &[
    "news", "bus", "gas", "class", "business", "series", "physics", "mathematics",
    "economics", "christmas", "kind", "sort", "lot",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ical",
];

/// Lexicon and suffix based tagger.
pub struct LexiconTagger {
    lexicon: HashMap<&'static str, Tag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        let mut lexicon = HashMap::new();
        let closed: &[(&[&str], Tag)] = &[
            (NOUNS, Tag::NN),
            (ADJECTIVES, Tag::JJ),
            (COMPARATIVES, Tag::JJR),
            (SUPERLATIVES, Tag::JJS),
            (NUMBERS, Tag::CD),
            (ADVERBS, Tag::RB),
            (COMPARATIVE_ADVERBS, Tag::RBR),
            (INTERJECTIONS, Tag::UH),
            (CONJUNCTIONS, Tag::CC),
            (PREPOSITIONS, Tag::IN),
            (PREDETERMINERS, Tag::PDT),
            (DETERMINERS, Tag::DT),
            (POSSESSIVE_PRONOUNS, Tag::PRPS),
            (PERSONAL_PRONOUNS, Tag::PRP),
            (MODALS, Tag::MD),
        ];
        // later entries override earlier ones
        for (words, tag) in closed {
            for word in words.iter() {
                lexicon.insert(*word, *tag);
            }
        }
        for (word, tag) in VERBS.iter().chain(WH_WORDS.iter()) {
            lexicon.entry(*word).or_insert(*tag);
        }
        lexicon.insert("to", Tag::TO);
        lexicon.insert("there", Tag::EX);

        Self { lexicon }
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicon tag of a token, if any.
    pub fn lookup(&self, token: &str) -> Option<Tag> {
        self.lexicon.get(token).copied()
    }

    /// Tag of an unknown token, from its shape.
    fn guess(token: &str) -> Tag {
        if !token.chars().any(char::is_alphanumeric) {
            return if token
                .chars()
                .all(|c| GeneralCategory::of(c).is_punctuation())
            {
                Tag::Punct
            } else {
                Tag::Sym
            };
        }

        if token.chars().any(|c| c.is_ascii_digit())
            && token
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        {
            return Tag::CD;
        }

        let len = token.chars().count();
        if len > 3 && token.ends_with("ly") {
            Tag::RB
        } else if len > 4 && token.ends_with("ing") {
            Tag::VBG
        } else if len > 3 && token.ends_with("ed") {
            Tag::VBD
        } else if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| token.ends_with(s)) {
            Tag::JJ
        } else if len > 3
            && token.ends_with('s')
            && !token.ends_with("ss")
            && !token.ends_with("us")
            && !token.ends_with("is")
            && !token.contains('\'')
        {
            Tag::NNS
        } else {
            Tag::NN
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<Tag> {
        let mut tags: Vec<(Tag, bool)> = tokens
            .iter()
            .map(|token| match self.lookup(token) {
                Some(tag) => (tag, false),
                None => (Self::guess(token), true),
            })
            .collect();

        for idx in 1..tags.len() {
            let prev = tags[idx - 1].0;
            let (tag, guessed) = tags[idx];
            let corrected = match (prev, tag) {
                // "the work", "my study": base verbs after a determiner are nouns
                (Tag::DT | Tag::PRPS | Tag::JJ, Tag::VBP) => Tag::NN,
                // "to go", "can go"
                (Tag::TO | Tag::MD, Tag::VBP) => Tag::VB,
                // "i like", "would like": the verb, not the preposition
                (Tag::PRP | Tag::RB, Tag::IN) if tokens[idx] == "like" => Tag::VBP,
                (Tag::TO | Tag::MD, Tag::IN) if tokens[idx] == "like" => Tag::VB,
                // "he likes", "they eat": guessed nouns right after a subject pronoun
                (Tag::PRP, Tag::NNS) if guessed => Tag::VBZ,
                (Tag::PRP, Tag::NN) if guessed => Tag::VBP,
                // "that" introducing a noun phrase
                (Tag::IN | Tag::VBP | Tag::VBD | Tag::VBZ, Tag::IN)
                    if tokens[idx] == "that" && next_is_nominal(&tags, idx) =>
                {
                    Tag::DT
                }
                (_, tag) => tag,
            };
            tags[idx].0 = corrected;
        }

        // "i study korean.": nationality words heading no noun phrase are the language
        for idx in 0..tags.len() {
            if tags[idx].0 == Tag::JJ
                && NATIONALITIES.contains(&tokens[idx].as_str())
                && !next_is_nominal(&tags, idx)
            {
                tags[idx].0 = Tag::NN;
            }
        }

        tags.into_iter().map(|(tag, _)| tag).collect()
    }
}

/// Adjectives that double as language or people nouns.
const NATIONALITIES: &[&str] = &[
    "english", "chinese", "japanese", "korean", "french", "spanish", "german", "italian",
];

fn next_is_nominal(tags: &[(Tag, bool)], idx: usize) -> bool {
    tags.get(idx + 1)
        .map(|(tag, _)| tag.is_noun() || tag.is_adjective())
        .unwrap_or(false)
}
