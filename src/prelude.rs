//! Exports the standard structs and traits.
//! 
pub use crate::error::Error;


pub use crate::sample::{
    Record,
    Sample,
    SampleReader,
};


pub use crate::id3::{
    // Learner
    Id3,
    Id3Builder,

    // Grown tree
    Id3Classifier,
    Node,
    LeafNode,
    BranchNode,

    classify,
};


pub use crate::classifier::Classifier;


pub use crate::research::CrossValidation;
