//! Defines the errors returned by this crate.
use std::path::PathBuf;
use thiserror::Error;


/// A shorthand for `std::result::Result<T, minitree::Error>`.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors that may occur while growing, using, or persisting a tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The training/test data is malformed,
    /// e.g., a record whose arity does not match the attribute list.
    #[error("Invalid input: {message}")]
    Input {
        /// Description of the malformed input.
        message: String,
    },

    /// An internal routine received an argument it never should,
    /// e.g., the entropy of an empty slice.
    #[error("Invariant violated: {message}")]
    Invariant {
        /// Description of the violated invariant.
        message: String,
    },

    /// The test record takes a value that never appeared
    /// at the corresponding node during training.
    #[error("Value `{value}` of attribute `{attribute}` was not seen during training")]
    UnseenValue {
        /// Attribute consulted by the node.
        attribute: String,
        /// Value given by the test record.
        value: String,
    },

    /// The persisted tree is not valid JSON or does not follow the format.
    #[error("Failed to parse the persisted tree: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The persisted tree parses, but is structurally inconsistent.
    #[error("Persisted tree is inconsistent: {message}")]
    Structure {
        /// Description of the inconsistency.
        message: String,
    },

    /// Failed to read or write a file.
    #[error("Failed to access {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}


impl Error {
    #[inline]
    pub(crate) fn input<S: Into<String>>(message: S) -> Self {
        Self::Input { message: message.into() }
    }


    #[inline]
    pub(crate) fn invariant<S: Into<String>>(message: S) -> Self {
        Self::Invariant { message: message.into() }
    }


    #[inline]
    pub(crate) fn structure<S: Into<String>>(message: S) -> Self {
        Self::Structure { message: message.into() }
    }


    #[inline]
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
