/*! Feature extraction

Feature families implement [Extract] and are chained in an [Extractors] registry,
which builds one merged [Features] mapping per document.

Which families are active, and which variant of the configurable features they emit,
is set by a [FeatureConfig].
!*/
pub mod config;
mod extract;
mod first_person;
mod lexicon;
mod pos;
mod sentence;
mod token;
mod value;

pub use config::{FeatureConfig, Overrides, SchemaVersion};
pub use extract::{Extract, Extractors};
pub use first_person::FirstPerson;
pub use lexicon::Lexicon;
pub use pos::PosRatios;
pub use sentence::SentenceStats;
pub use token::TokenStats;
pub use value::{FeatureValue, Features};

/// `num / den`, or `0.0` when there is nothing to divide by.
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
