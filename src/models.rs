//! Core data structures for MAWS conversion.
//!
//! Defines the parsed column table, the in-memory labeled dataset handed to
//! the writer, attribute value kinds, and batch statistics.

use std::path::PathBuf;

/// Scalar attribute value kinds supported by the artifact
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Float(f64),
    Int(i64),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Ordered attribute list with replace-on-collision semantics
///
/// Keeps insertion order for the artifact while letting later writers
/// (the configured-attribute merge step) overwrite earlier values.
#[derive(Debug, Clone, Default)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set an attribute, replacing an existing entry with the same name in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sample storage for one data variable
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Float(Vec<f64>),
    Int(Vec<i32>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float(values) => values.len(),
            ColumnData::Int(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One named, typed, attribute-carrying data variable
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub data: ColumnData,
    pub attrs: Attributes,
}

impl Variable {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
            attrs: Attributes::new(),
        }
    }
}

/// Column-oriented parse result for one telemetry file
///
/// `columns` holds the ten data columns in schema order, row-aligned with
/// `timestamps`. All values are kept as f64 at this stage; storage typing
/// is applied by the dataset builder.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    pub path: PathBuf,
    pub timestamps: Vec<i64>,
    pub columns: Vec<Vec<f64>>,
}

impl ColumnTable {
    pub fn row_count(&self) -> usize {
        self.timestamps.len()
    }
}

/// In-memory labeled dataset: one time coordinate plus aligned data variables
///
/// Created fresh per input file, fully populated by the pipeline, handed
/// once to the writer, then dropped.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Source order and duplicates preserved as parsed
    pub time: Vec<i64>,
    pub time_attrs: Attributes,
    pub variables: Vec<Variable>,
    pub attrs: Attributes,
}

impl Dataset {
    /// Number of time steps
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|v| v.name == name)
    }
}

/// Statistics for a batch conversion run
#[derive(Debug, Default)]
pub struct ConversionStats {
    pub files_converted: usize,
    pub files_failed: usize,
    pub total_rows: usize,
    pub elapsed_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_replace_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("title", "first");
        attrs.set("institution", "somewhere");
        attrs.set("title", "second");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("title"), Some(&AttrValue::Text("second".into())));
        // Replacement keeps the original position
        assert_eq!(attrs.iter().next().unwrap().0, "title");
    }

    #[test]
    fn test_attr_value_conversions() {
        assert_eq!(AttrValue::from("x"), AttrValue::Text("x".to_string()));
        assert_eq!(AttrValue::from(1.5), AttrValue::Float(1.5));
        assert_eq!(AttrValue::from(7i64), AttrValue::Int(7));
    }

    #[test]
    fn test_dataset_variable_lookup() {
        let dataset = Dataset {
            time: vec![1, 2],
            time_attrs: Attributes::new(),
            variables: vec![Variable::new("latitude", ColumnData::Float(vec![1.0, 2.0]))],
            attrs: Attributes::new(),
        };

        assert_eq!(dataset.len(), 2);
        assert!(dataset.variable("latitude").is_some());
        assert!(dataset.variable("longitude").is_none());
    }
}
