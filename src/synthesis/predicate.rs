//! Compilation of a tree into source text for a standalone
//! classification routine.
//!
//! The routine is built as a branch AST and rendered in one pass; the
//! AST also carries an evaluator so equivalence with the classifier
//! can be checked without executing the emitted source.
use crate::constants::{INDENT, MEMBERSHIP_CONSTANT_THRESHOLD};
use crate::data::{Record, Schema};
use crate::node::Node;
use crate::tree::tree::Tree;

/// One branch of the generated `if`/`elif` chain at a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Branch {
    /// Equality test descending into a nested chain.
    Descend {
        attribute: usize,
        value: String,
        body: Vec<Branch>,
    },
    /// Membership test over the node's positive-leaf values,
    /// returning true. Emitted last, after all edges were visited.
    Accept { attribute: usize, values: Vec<String> },
}

/// The compiled routine. Branches not taken fall through to a
/// default-false answer, so unlike the classifier the routine is
/// total over all attribute values; that default is a documented
/// approximation of the classifier's "no matching branch" failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredicateRoutine {
    /// Degenerate single-leaf tree.
    Always(bool),
    /// Top-level branch chain plus the implicit default-false.
    Chain(Vec<Branch>),
}

/// Compile a fitted tree.
pub fn synthesize(tree: &Tree) -> PredicateRoutine {
    match &tree.nodes[tree.root] {
        Node::Leaf { positive } => PredicateRoutine::Always(*positive),
        Node::Decision { .. } => PredicateRoutine::Chain(node_branches(tree, tree.root)),
    }
}

fn node_branches(tree: &Tree, node: usize) -> Vec<Branch> {
    let Node::Decision { attribute, edges } = &tree.nodes[node] else {
        return Vec::new();
    };
    let mut branches = Vec::new();
    let mut accepted = Vec::new();
    for edge in edges {
        match &tree.nodes[edge.child] {
            Node::Decision { .. } => branches.push(Branch::Descend {
                attribute: *attribute,
                value: edge.label.clone(),
                body: node_branches(tree, edge.child),
            }),
            Node::Leaf { positive: true } => accepted.push(edge.label.clone()),
            // Negative leaves fall through to the default.
            Node::Leaf { positive: false } => {}
        }
    }
    if !accepted.is_empty() {
        branches.push(Branch::Accept {
            attribute: *attribute,
            values: accepted,
        });
    }
    branches
}

impl PredicateRoutine {
    /// Render to Python source: a `classify(record)` function testing
    /// attribute values via `record.get_attribute`, ending in a
    /// top-level `else` that returns `False`.
    pub fn render(&self, schema: &Schema) -> String {
        let mut out = String::from("def classify(record):\n");
        match self {
            PredicateRoutine::Always(positive) => {
                out.push_str(&format!("{INDENT}return {}\n", python_bool(*positive)));
            }
            PredicateRoutine::Chain(branches) => {
                render_branches(branches, schema, 1, &mut out);
                out.push_str(&format!("{INDENT}else:\n{}return False\n", INDENT.repeat(2)));
            }
        }
        out
    }

    /// Evaluate against a record, mirroring the rendered source: the
    /// first branch whose test matches decides, anything unmatched is
    /// false.
    pub fn evaluate(&self, record: &Record) -> bool {
        match self {
            PredicateRoutine::Always(positive) => *positive,
            PredicateRoutine::Chain(branches) => eval_branches(branches, record),
        }
    }
}

fn render_branches(branches: &[Branch], schema: &Schema, tab: usize, out: &mut String) {
    let indent = INDENT.repeat(tab);
    let mut prior = false;
    for branch in branches {
        match branch {
            Branch::Descend { attribute, value, body } => {
                let keyword = if prior { "elif" } else { "if" };
                out.push_str(&format!(
                    "{indent}{keyword} record.get_attribute('{}') == '{value}':\n",
                    schema.attribute_name(*attribute)
                ));
                render_branches(body, schema, tab + 1, out);
            }
            Branch::Accept { attribute, values } => {
                let name = schema.attribute_name(*attribute);
                let constant = values.len() > MEMBERSHIP_CONSTANT_THRESHOLD;
                if constant {
                    out.push_str(&format!("{indent}accepted_values = [{}]\n", python_list(values)));
                }
                // A materialized constant interrupts the if/elif
                // chain, so the membership test restarts with `if`.
                let keyword = if prior && !constant { "elif" } else { "if" };
                let test = if values.len() == 1 {
                    format!("record.get_attribute('{name}') == '{}'", values[0])
                } else if constant {
                    format!("record.get_attribute('{name}') in accepted_values")
                } else {
                    format!("record.get_attribute('{name}') in [{}]", python_list(values))
                };
                out.push_str(&format!("{indent}{keyword} {test}:\n"));
                out.push_str(&format!("{}return True\n", INDENT.repeat(tab + 1)));
            }
        }
        prior = true;
    }
}

fn python_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
    quoted.join(", ")
}

fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn eval_branches(branches: &[Branch], record: &Record) -> bool {
    for branch in branches {
        match branch {
            Branch::Descend { attribute, value, body } => {
                if record.value(*attribute) == value {
                    return eval_branches(body, record);
                }
            }
            Branch::Accept { attribute, values } => {
                if values.iter().any(|v| v == record.value(*attribute)) {
                    return true;
                }
            }
        }
    }
    false
}
