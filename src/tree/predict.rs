//! Classification by tree traversal.
use crate::data::Record;
use crate::errors::AmanitaError;
use crate::node::Node;
use crate::tree::tree::Tree;

impl Tree {
    /// Walk from the root to a leaf, following at each decision node
    /// the edge whose label equals the record's value of the split
    /// attribute. Returns the leaf's label.
    ///
    /// A value with no matching edge (one never seen during growth)
    /// fails with [`AmanitaError::NoMatchingBranch`] rather than
    /// defaulting; a generated predicate answers `False` in that
    /// situation, which is its documented approximation.
    pub fn predict(&self, record: &Record) -> Result<bool, AmanitaError> {
        let mut node = &self.nodes[self.root];
        loop {
            match node {
                Node::Leaf { positive } => return Ok(*positive),
                Node::Decision { attribute, edges } => {
                    let value = record.value(*attribute);
                    let edge = edges.iter().find(|e| e.label == value).ok_or_else(|| {
                        AmanitaError::NoMatchingBranch {
                            attribute: self.schema.attribute_name(*attribute).to_string(),
                            value: value.to_string(),
                        }
                    })?;
                    node = &self.nodes[edge.child];
                }
            }
        }
    }
}
