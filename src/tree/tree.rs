//! Tree growth by recursive partitioning on the attribute with the
//! highest information gain.
use crate::data::{Dataset, Schema};
use crate::errors::AmanitaError;
use crate::impurity::{entropy, information_gain, partition_by_attribute};
use crate::node::{Edge, Node};
use crate::render::render;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

/// A fitted decision tree: an arena of nodes, the arena index of the
/// root, and a copy of the schema the tree was grown against.
///
/// The tree is immutable once grown; the classifier, the renderer and
/// the two synthesizers all read it without touching it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
    pub root: usize,
    pub schema: Schema,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Grow a tree over the full dataset.
    ///
    /// A pure dataset short-circuits to a single leaf; otherwise the
    /// recursive grower splits until every subset is pure. Growth is
    /// deterministic: rebuilding from the same dataset yields a
    /// structurally identical tree.
    pub fn fit(data: &Dataset) -> Result<Self, AmanitaError> {
        let index = data.full_index();
        if index.is_empty() {
            return Err(AmanitaError::EmptyRecordSet);
        }

        let mut tree = Tree {
            nodes: Vec::new(),
            root: 0,
            schema: data.schema().clone(),
            depth: 0,
            n_leaves: 0,
        };
        tree.root = if entropy(data, &index)? == 0.0 {
            tree.push_leaf(data.record(index[0]).is_positive())
        } else {
            tree.grow(data, &index, 0)?
        };

        info!(
            "grew decision tree over {} records: {} nodes, {} leaves, depth {}",
            index.len(),
            tree.nodes.len(),
            tree.n_leaves,
            tree.depth
        );
        Ok(tree)
    }

    /// Split a mixed-label subset. Children are materialized before
    /// their parent, so the arena fills bottom-up.
    fn grow(&mut self, data: &Dataset, idx: &[usize], depth: usize) -> Result<usize, AmanitaError> {
        let attribute = self.select_attribute(data, idx)?;
        debug!(
            "splitting {} records on {:?} at depth {}",
            idx.len(),
            self.schema.attribute_name(attribute),
            depth
        );

        let mut edges = Vec::new();
        for (value, group) in partition_by_attribute(data, idx, attribute) {
            let child = if entropy(data, &group)? == 0.0 {
                self.push_leaf(data.record(group[0]).is_positive())
            } else {
                self.grow(data, &group, depth + 1)?
            };
            edges.push(Edge { label: value, child });
        }

        self.depth = self.depth.max(depth + 1);
        let num = self.nodes.len();
        self.nodes.push(Node::Decision { attribute, edges });
        Ok(num)
    }

    /// Pick the attribute with the strictly greatest information
    /// gain. Gains are scored in parallel, then the argmax is taken
    /// sequentially so ties always resolve to the first attribute in
    /// schema order. A zero-gain winner is accepted; the partitions
    /// still shrink, so recursion terminates regardless.
    fn select_attribute(&self, data: &Dataset, idx: &[usize]) -> Result<usize, AmanitaError> {
        let gains = (0..self.schema.n_attributes())
            .into_par_iter()
            .map(|attribute| information_gain(data, idx, attribute))
            .collect::<Result<Vec<f64>, AmanitaError>>()?;

        let mut best = 0;
        for (attribute, &gain) in gains.iter().enumerate().skip(1) {
            if gain > gains[best] {
                best = attribute;
            }
        }
        Ok(best)
    }

    fn push_leaf(&mut self, positive: bool) -> usize {
        self.n_leaves += 1;
        self.nodes.push(Node::Leaf { positive });
        self.nodes.len() - 1
    }

    /// Fraction of records in `data` the tree labels correctly.
    pub fn evaluate(&self, data: &Dataset) -> Result<f64, AmanitaError> {
        if data.n_records() == 0 {
            return Err(AmanitaError::EmptyRecordSet);
        }
        let mut correct = 0usize;
        for record in data.records() {
            if self.predict(record)? == record.is_positive() {
                correct += 1;
            }
        }
        Ok(correct as f64 / data.n_records() as f64)
    }

    /// Serialize the tree to JSON.
    pub fn json_dump(&self) -> Result<String, AmanitaError> {
        serde_json::to_string(self).map_err(|e| AmanitaError::UnableToWrite(e.to_string()))
    }

    /// Deserialize a tree from JSON.
    pub fn from_json(json_str: &str) -> Result<Self, AmanitaError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| AmanitaError::UnableToRead(e.to_string()))
    }

    /// Write the tree to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AmanitaError> {
        fs::write(path, self.json_dump()?).map_err(|e| AmanitaError::UnableToWrite(e.to_string()))
    }

    /// Read a tree back from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AmanitaError> {
        let json_str = fs::read_to_string(path).map_err(|e| AmanitaError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(self))
    }
}
