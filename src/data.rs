//! Dataset representation: a fixed attribute schema, schema-indexed
//! records, and a delimited-text loader.
//!
//! Attributes are addressed by `usize` ids into the [`Schema`] rather
//! than by per-record string maps, which makes the "all records share
//! one attribute set" invariant structural instead of assumed.
use crate::constants::{LABEL_NEGATIVE, LABEL_POSITIVE};
use crate::errors::AmanitaError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The ordered attribute-name table shared by every record of a
/// dataset. Attribute ids are indexes into this table; the order is
/// the natural enumeration order used for split tie-breaking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    attributes: Vec<String>,
}

impl Schema {
    pub fn new(attributes: Vec<String>) -> Self {
        Schema { attributes }
    }

    /// Resolve an attribute name to its id.
    pub fn attribute_id(&self, name: &str) -> Result<usize, AmanitaError> {
        self.attributes
            .iter()
            .position(|a| a == name)
            .ok_or_else(|| AmanitaError::UnknownAttribute(name.to_string(), self.attributes.join(", ")))
    }

    pub fn attribute_name(&self, id: usize) -> &str {
        &self.attributes[id]
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attributes
    }

    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }
}

/// One labelled example: attribute values aligned to the schema plus
/// a binary label. Immutable once created; recursive partitioning
/// works on row-index subsets, never on copies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    values: Vec<String>,
    positive: bool,
}

impl Record {
    pub fn new(values: Vec<String>, positive: bool) -> Self {
        Record { values, positive }
    }

    /// Value of the attribute with the given schema id.
    pub fn value(&self, attribute: usize) -> &str {
        &self.values[attribute]
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }
}

/// An ordered collection of records sharing one schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    schema: Schema,
    records: Vec<Record>,
}

impl Dataset {
    /// Assemble a dataset from parts, checking that every record is
    /// as wide as the schema.
    pub fn new(schema: Schema, records: Vec<Record>) -> Result<Self, AmanitaError> {
        let width = schema.n_attributes();
        for (i, record) in records.iter().enumerate() {
            if record.values.len() != width {
                return Err(AmanitaError::MalformedDataset(format!(
                    "record {} has {} values, schema has {} attributes",
                    i,
                    record.values.len(),
                    width
                )));
            }
        }
        Ok(Dataset { schema, records })
    }

    /// Load a dataset from a delimited file. The first column holds
    /// the label (`Yes`/`No`), the remaining header cells name the
    /// attributes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AmanitaError> {
        let file = File::open(path).map_err(|e| AmanitaError::UnableToRead(e.to_string()))?;
        Self::from_reader(file)
    }

    /// Load a dataset from any reader yielding delimited text.
    /// Preserves input row order.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AmanitaError> {
        let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| AmanitaError::MalformedDataset(e.to_string()))?;
        if headers.len() < 2 {
            return Err(AmanitaError::MalformedDataset(
                "header must name a label column and at least one attribute".to_string(),
            ));
        }
        let attributes: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();
        for (i, a) in attributes.iter().enumerate() {
            if attributes[..i].contains(a) {
                return Err(AmanitaError::MalformedDataset(format!("duplicate attribute {a:?}")));
            }
        }
        let schema = Schema::new(attributes);

        let mut records = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| AmanitaError::MalformedDataset(e.to_string()))?;
            if record.len() != schema.n_attributes() + 1 {
                return Err(AmanitaError::MalformedDataset(format!(
                    "row {} has {} cells, expected {}",
                    row + 1,
                    record.len(),
                    schema.n_attributes() + 1
                )));
            }
            let positive = match &record[0] {
                l if l == LABEL_POSITIVE => true,
                l if l == LABEL_NEGATIVE => false,
                other => {
                    return Err(AmanitaError::MalformedDataset(format!(
                        "row {} has label {other:?}, expected {LABEL_POSITIVE:?} or {LABEL_NEGATIVE:?}",
                        row + 1
                    )))
                }
            };
            let values = record.iter().skip(1).map(|v| v.to_string()).collect();
            records.push(Record::new(values, positive));
        }

        Dataset { schema, records }.validate()
    }

    fn validate(self) -> Result<Self, AmanitaError> {
        if self.records.is_empty() {
            return Err(AmanitaError::MalformedDataset("dataset holds no records".to_string()));
        }
        Ok(self)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, row: usize) -> &Record {
        &self.records[row]
    }

    pub fn n_records(&self) -> usize {
        self.records.len()
    }

    /// Index of every row, the starting subset for tree growth.
    pub fn full_index(&self) -> Vec<usize> {
        (0..self.records.len()).collect()
    }
}
