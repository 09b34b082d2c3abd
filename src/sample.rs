//! Struct `Sample` represents a table of categorical records.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::{Record, Sample};
