//! Errors
//!
//! Custom error types used throughout the `amanita` crate.
use thiserror::Error;

/// Errors that can occur while loading data, growing a tree,
/// or classifying records.
#[derive(Debug, Error)]
pub enum AmanitaError {
    /// Entropy or tree growth was requested on an empty record set.
    #[error("Operation requires a non-empty record set.")]
    EmptyRecordSet,
    /// An attribute name is not part of the dataset schema.
    #[error("Unknown attribute {0:?}, expected one of [{1}].")]
    UnknownAttribute(String, String),
    /// A record carried a value the tree never saw during training.
    #[error("No branch matches value {value:?} of attribute {attribute:?}; record is unclassifiable.")]
    NoMatchingBranch {
        /// Attribute the decision node splits on.
        attribute: String,
        /// The record's value for that attribute.
        value: String,
    },
    /// The input file violates the expected row layout.
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),
    /// Unable to read a dataset or model from a file.
    #[error("Unable to read from a file: {0}")]
    UnableToRead(String),
    /// Unable to write a model or generated source to a file.
    #[error("Unable to write to a file: {0}")]
    UnableToWrite(String),
}
