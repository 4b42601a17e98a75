//! Interpretable decision-tree induction for fully categorical,
//! binary-labelled data.
//!
//! A [`Tree`] is grown by recursive partitioning on the attribute
//! with the highest information gain, until every subset is pure.
//! The fitted tree feeds four independent consumers: classification
//! ([`Tree::predict`]), an indented textual trace ([`render::render`]),
//! a minimal boolean-predicate rendering ([`synthesis::boolean`]),
//! and generated source for a standalone predicate routine
//! ([`synthesis::predicate`]).
//!
//! ```
//! use amanita::{Dataset, Tree};
//!
//! let csv = "\
//! edible,odor
//! No,Pungent
//! Yes,Almond
//! ";
//! let data = Dataset::from_reader(csv.as_bytes())?;
//! let tree = Tree::fit(&data)?;
//! assert!(tree.predict(data.record(1))?);
//! # Ok::<(), amanita::AmanitaError>(())
//! ```

// Modules
pub mod constants;
pub mod data;
pub mod errors;
pub mod impurity;
pub mod node;
pub mod render;
pub mod synthesis;
pub mod tree;

#[cfg(test)]
pub(crate) mod testing;

// Individual classes, and functions
pub use data::{Dataset, Record, Schema};
pub use errors::AmanitaError;
pub use tree::Tree;
