//! Tree vertices, stored in an arena and addressed by index.
//!
//! A decision node owns its outgoing edges; an edge carries the
//! attribute value selecting that branch and the arena index of the
//! child. Traversal is always top-down, so no parent links are kept.
use serde::{Deserialize, Serialize};

/// A labelled link from a decision node to the subtree handling one
/// attribute value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Attribute value that selects this branch.
    pub label: String,
    /// Arena index of the child node.
    pub child: usize,
}

/// A tree vertex: either an internal split or a terminal label.
///
/// A node is a leaf if and only if it has no edges; the two variants
/// make that invariant structural.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Internal vertex splitting on one attribute; always has at
    /// least one edge, one per attribute value observed among the
    /// records that reached it during growth.
    Decision {
        /// Schema id of the attribute tested here.
        attribute: usize,
        /// Outgoing branches, in value-first-encountered order.
        edges: Vec<Edge>,
    },
    /// Terminal vertex carrying the classification.
    Leaf {
        /// True for the positive label.
        positive: bool,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
