//! Indented textual trace of every decision path in a tree.
use crate::constants::{INDENT, LABEL_NEGATIVE, LABEL_POSITIVE};
use crate::node::Node;
use crate::tree::tree::Tree;

/// Render one line per edge traversed, `<attribute> = <label>`,
/// indented by depth, with each leaf's label one level deeper.
///
/// Traversal is depth-first with edges in insertion order, so the
/// output is byte-identical on every run for the same tree.
pub fn render(tree: &Tree) -> String {
    let mut out = String::new();
    render_node(tree, tree.root, 0, &mut out);
    out
}

fn render_node(tree: &Tree, node: usize, depth: usize, out: &mut String) {
    match &tree.nodes[node] {
        Node::Leaf { positive } => {
            // Only reachable as the root of a single-leaf tree;
            // leaves under a decision node are printed by the arm
            // below.
            out.push_str(&format!("{}\n", label_of(*positive)));
        }
        Node::Decision { attribute, edges } => {
            let name = tree.schema.attribute_name(*attribute);
            for edge in edges {
                out.push_str(&format!("{}{} = {}\n", INDENT.repeat(depth), name, edge.label));
                match &tree.nodes[edge.child] {
                    Node::Leaf { positive } => {
                        out.push_str(&format!("{}{}\n", INDENT.repeat(depth + 1), label_of(*positive)));
                    }
                    Node::Decision { .. } => render_node(tree, edge.child, depth + 1, out),
                }
            }
        }
    }
}

fn label_of(positive: bool) -> &'static str {
    if positive {
        LABEL_POSITIVE
    } else {
        LABEL_NEGATIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mushroom_fixture;

    #[test]
    fn test_render_exact_layout() {
        let tree = Tree::fit(&mushroom_fixture()).unwrap();
        let expected = "\
odor = Pungent
    No
odor = Almond
    Yes
odor = Anise
    Yes
odor = None
    spore-print-color = Black
        Yes
    spore-print-color = Green
        No
    spore-print-color = Brown
        Yes
";
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let tree = Tree::fit(&mushroom_fixture()).unwrap();
        assert_eq!(render(&tree), render(&tree));
    }

    #[test]
    fn test_display_matches_render() {
        let tree = Tree::fit(&mushroom_fixture()).unwrap();
        assert_eq!(format!("{tree}"), render(&tree));
    }
}
