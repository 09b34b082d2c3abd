//! ID3 decision tree for categorical attributes.
//! 
//! The tree is grown by recursive partitioning.
//! Each branch node consumes the attribute with the maximal
//! information gain, and each leaf node predicts a single label.

/// Defines the ID3 learner.
pub mod id3_algorithm;
/// Defines the builder of the ID3 learner.
pub mod builder;
/// Defines the classifier produced by `Id3`.
pub mod id3_classifier;

/// Defines the inner representation of `Id3Classifier`.
pub mod node;

pub(crate) mod entropy;
pub(crate) mod partition;
pub(crate) mod criterion;
pub(crate) mod vote;
pub(crate) mod persisted;


pub use id3_algorithm::Id3;
pub use builder::Id3Builder;
pub use id3_classifier::{classify, Id3Classifier};
pub use criterion::DEFAULT_GAIN_TOLERANCE;
pub use node::{Node, LeafNode, BranchNode};
