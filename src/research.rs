//! This directory provides some features for research  
//! Evaluate a tree learner on held-out records
//! - k-fold training/test pairs

/// Provides an iterator over cross validation folds.
pub mod cross_validation;

pub use cross_validation::CrossValidation;
