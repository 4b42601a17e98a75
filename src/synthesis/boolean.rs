//! Compression of a tree's positive paths into one grouped boolean
//! expression over `(attribute = value)` equality tests.
//!
//! The expression is built as a small AST first, so tests can check
//! semantic agreement with the classifier independently of the
//! rendered text.
use crate::data::{Record, Schema};
use crate::node::Node;
use crate::synthesis::subtree_has_positive;
use crate::tree::tree::Tree;

/// One disjunct of the synthesized expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// `(attribute = value)`: the edge leads straight to a positive
    /// leaf.
    Literal { attribute: usize, value: String },
    /// `(attribute = value AND ...)`: the edge leads into a decision
    /// node with further qualifying branches.
    Conjunction {
        attribute: usize,
        value: String,
        inner: Vec<Term>,
    },
}

/// The synthesized expression: true exactly on the records the tree
/// classifies positive (over values seen during growth).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BooleanExpression {
    /// Degenerate single-leaf tree.
    Always(bool),
    /// Disjunction of the root node's qualifying terms.
    AnyOf(Vec<Term>),
}

/// Build the expression for a fitted tree. Edges whose subtree holds
/// no positive leaf are dropped entirely; they can never contribute a
/// true positive path.
pub fn synthesize(tree: &Tree) -> BooleanExpression {
    match &tree.nodes[tree.root] {
        Node::Leaf { positive } => BooleanExpression::Always(*positive),
        Node::Decision { .. } => BooleanExpression::AnyOf(node_terms(tree, tree.root)),
    }
}

fn node_terms(tree: &Tree, node: usize) -> Vec<Term> {
    let Node::Decision { attribute, edges } = &tree.nodes[node] else {
        return Vec::new();
    };
    edges
        .iter()
        .filter(|edge| subtree_has_positive(tree, edge.child))
        .map(|edge| match &tree.nodes[edge.child] {
            // A qualifying leaf is necessarily positive.
            Node::Leaf { .. } => Term::Literal {
                attribute: *attribute,
                value: edge.label.clone(),
            },
            Node::Decision { .. } => Term::Conjunction {
                attribute: *attribute,
                value: edge.label.clone(),
                inner: node_terms(tree, edge.child),
            },
        })
        .collect()
}

impl BooleanExpression {
    /// Render to the grouped `OR`/`AND` grammar. A conjunction whose
    /// inner disjunction holds more than one term gets an extra pair
    /// of grouping parentheses; a lone inner term is chained bare
    /// after `AND`. That asymmetry is the expression's compactness
    /// rule, not an accident.
    pub fn render(&self, schema: &Schema) -> String {
        match self {
            BooleanExpression::Always(true) => "(TRUE)".to_string(),
            BooleanExpression::Always(false) => "(FALSE)".to_string(),
            BooleanExpression::AnyOf(terms) => format!("({})", render_terms(terms, schema)),
        }
    }

    /// Evaluate against a record, mirroring the rendered grammar.
    pub fn evaluate(&self, record: &Record) -> bool {
        match self {
            BooleanExpression::Always(positive) => *positive,
            BooleanExpression::AnyOf(terms) => eval_terms(terms, record),
        }
    }
}

fn render_terms(terms: &[Term], schema: &Schema) -> String {
    let rendered: Vec<String> = terms.iter().map(|t| render_term(t, schema)).collect();
    rendered.join(" OR ")
}

fn render_term(term: &Term, schema: &Schema) -> String {
    match term {
        Term::Literal { attribute, value } => {
            format!("({} = {})", schema.attribute_name(*attribute), value)
        }
        Term::Conjunction {
            attribute,
            value,
            inner,
        } => {
            let name = schema.attribute_name(*attribute);
            let sub = render_terms(inner, schema);
            if inner.len() > 1 {
                format!("({name} = {value} AND ({sub}))")
            } else {
                format!("({name} = {value} AND {sub})")
            }
        }
    }
}

fn eval_terms(terms: &[Term], record: &Record) -> bool {
    terms.iter().any(|term| match term {
        Term::Literal { attribute, value } => record.value(*attribute) == value,
        Term::Conjunction {
            attribute,
            value,
            inner,
        } => record.value(*attribute) == value && eval_terms(inner, record),
    })
}
