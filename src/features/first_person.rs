//! Share of first person pronouns among linguistic tokens.
use super::{ratio, Extract, Features};
use crate::nlp::Toolkit;

const FIRST_PERSON: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
];

#[derive(Debug, Default, Clone)]
pub struct FirstPerson;

impl Extract for FirstPerson {
    fn name(&self) -> &'static str {
        "first_person"
    }

    fn keys(&self) -> Vec<&'static str> {
        vec!["first_person_ratio"]
    }

    fn extract(&self, text: &str, toolkit: &Toolkit) -> Features {
        let words = toolkit.tokenizer().words(text);
        let first_person = words
            .iter()
            .filter(|w| FIRST_PERSON.contains(&w.as_str()))
            .count();

        let mut features = Features::new();
        features.insert("first_person_ratio", ratio(first_person, words.len()));
        features
    }
}

#[cfg(test)]
mod tests {
    use super::{Extract, FirstPerson};
    use crate::nlp::Toolkit;

    #[test]
    fn empty() {
        let f = FirstPerson.extract("", &Toolkit::new());
        assert_eq!(f.float("first_person_ratio"), Some(0.0));
    }

    #[test]
    fn ratio() {
        // i love my cat .
        let f = FirstPerson.extract("I love my cat.", &Toolkit::new());
        assert_eq!(f.float("first_person_ratio"), Some(2.0 / 5.0));
    }

    #[test]
    fn contractions_are_not_counted() {
        let f = FirstPerson.extract("I'm here", &Toolkit::new());
        assert_eq!(f.float("first_person_ratio"), Some(0.0));
    }
}
