/*!
# IO utilities

Reading of Lang-8 archives and split manifests, and writing of built datasets.
!*/
pub mod reader;
pub mod writer;
