/*! Dataset export

Writes a built [crate::pipelines::Dataset] as one CSV file per split,
plus a `features.json` file describing the columns and the schema.
!*/
mod dataset_writer;

pub use dataset_writer::{DatasetWriter, SchemaFile};
