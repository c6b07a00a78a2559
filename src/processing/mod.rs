/*! Dataset processing

Transforms built datasets into what a classifier consumes.
!*/
mod vectorize;

pub use vectorize::DictVectorizer;
