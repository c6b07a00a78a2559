//! Pipelines.
//!
//! - [DatasetBuilder] turns an archive and three split manifests into a [Dataset].
//! - [Inspect] dumps extracted labels and features of an archive.
//!
//! Both implement the light [Pipeline] trait.
mod builder;
mod dataset;
mod inspect;
#[allow(clippy::module_inception)]
mod pipeline;

pub use builder::{build, DatasetBuilder, Mode, DEFAULT_CHUNK_SIZE};
pub use dataset::{BuildReport, Dataset, SplitData};
pub use inspect::Inspect;
pub use pipeline::Pipeline;
