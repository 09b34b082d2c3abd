#![warn(missing_docs)]

//! 
//! A crate that provides ID3 decision trees for categorical data.
//! 
//! Given a small table of records whose attributes take discrete values,
//! this crate grows a human-readable decision tree
//! by recursively splitting on the attribute
//! that maximizes the information gain.
//! 
//! - Training
//!     [`Id3Builder`] configures the learner and
//!     [`Id3::fit`] grows an [`Id3Classifier`] from a [`Sample`].
//! 
//! - Inference
//!     [`Id3Classifier`] implements [`Classifier`],
//!     so that one can predict the label of a new record.
//!     A value that never appeared during training yields
//!     [`Error::UnseenValue`] instead of a guess.
//! 
//! - Persistence
//!     A grown tree is written to / read from a JSON file
//!     by [`Id3Classifier::save`] and [`Id3Classifier::load`].
//! 
//! # Example
//! ```no_run
//! use minitree::prelude::*;
//! 
//! let sample = SampleReader::new()
//!     .file("data/lenses.txt")
//!     .attributes(&["age", "prescript", "astigmatic", "tearRate"])
//!     .read()?;
//! 
//! let tree = Id3Builder::new(&sample)
//!     .build()
//!     .fit()?;
//! 
//! let record = ["young", "myope", "no", "normal"];
//! let label = tree.predict(&record.map(String::from))?;
//! println!("{label}");
//! # Ok::<(), minitree::Error>(())
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod id3;
pub mod research;
pub mod logging;
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{Record, Sample, SampleReader};

pub use classifier::Classifier;

pub use id3::{
    classify,
    Id3,
    Id3Builder,
    Id3Classifier,
    Node,
    LeafNode,
    BranchNode,
};

pub use research::CrossValidation;
