//! Serializing consumers that compress a tree into standalone
//! predicate forms: a boolean expression and generated source.
//!
//! Both synthesizers share one filtering rule: an edge can only
//! contribute to a positive answer when its subtree holds at least
//! one positive leaf.
pub mod boolean;
pub mod predicate;

use crate::node::Node;
use crate::tree::tree::Tree;

/// Whether any leaf in the subtree rooted at `node` is positive.
pub(crate) fn subtree_has_positive(tree: &Tree, node: usize) -> bool {
    match &tree.nodes[node] {
        Node::Leaf { positive } => *positive,
        Node::Decision { edges, .. } => edges.iter().any(|e| subtree_has_positive(tree, e.child)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mushroom_fixture;

    #[test]
    fn test_negative_only_subtrees_are_detected() {
        let tree = Tree::fit(&mushroom_fixture()).unwrap();
        let Node::Decision { edges, .. } = &tree.nodes[tree.root] else {
            panic!("root must be a decision node");
        };
        for edge in edges {
            let expected = edge.label != "Pungent";
            assert_eq!(subtree_has_positive(&tree, edge.child), expected, "edge {}", edge.label);
        }
    }
}
