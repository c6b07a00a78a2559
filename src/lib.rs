/*! # lang8-features

Feature extraction for native language family classification on the Lang-8 learner corpus.

- [io::reader] reads the zip archive of pages and the split manifests,
- [lang] maps native languages to a class,
- [nlp] holds the tokenizer, tagger and lemmatizer shared by feature extractors,
- [features] holds the feature families and their registry,
- [pipelines] builds the train/dev/test dataset,
- [processing] and [io::writer] vectorize and export it.
!*/
pub mod cli;
pub mod error;
pub mod features;
pub mod io;
pub mod lang;
pub mod nlp;
pub mod pipelines;
pub mod processing;
