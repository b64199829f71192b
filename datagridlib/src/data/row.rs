//! Row and cell value types.
//!
//! A row is an identifier plus an ordered map of named scalar fields. The
//! identifier is the row's identity: the engine never compares field
//! contents to tell rows apart.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which a row's identifier is exposed to columns and exports.
pub const ID_FIELD: &str = "id";

/// A scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric value (sortable)
    Number(f64),
    /// Text value
    Text(String),
}

impl CellValue {
    /// Numeric view of the value, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// Text view of the value, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// One data entity of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    id: String,
    #[serde(flatten)]
    fields: IndexMap<String, CellValue>,
}

impl Row {
    /// Create a row with no fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder: add or replace a field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The row identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Field value by key. The identifier is not a field.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    /// Numeric field value, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(CellValue::as_number)
    }

    /// Display string for a key; `id` resolves to the identifier and
    /// missing fields render empty.
    pub fn display(&self, key: &str) -> String {
        if key == ID_FIELD {
            return self.id.clone();
        }
        self.get(key).map(|v| v.to_string()).unwrap_or_default()
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}
