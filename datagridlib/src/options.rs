//! Engine configuration.
//!
//! `TableOptions` carries every tunable the engine and its collaborators
//! read: pagination defaults, column width defaults, export naming and the
//! delay of the simulated initial load. Defaults match the stock widget.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Width used for columns that have no explicit size
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// Floor enforced by resize gestures
pub const MIN_COLUMN_WIDTH: u32 = 100;

/// Configuration for a table engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Initial page size
    pub page_size: usize,
    /// Page sizes offered by pagination controls
    pub page_size_choices: Vec<usize>,
    /// Width reported for columns absent from the sizing map
    pub default_column_width: u32,
    /// Minimum width a resize gesture may produce
    pub min_column_width: u32,
    /// Sheet name written by exporters
    pub sheet_name: String,
    /// File stem used by exporters (extension is exporter-specific)
    pub export_file_stem: String,
    /// Row fields left out of every exported record
    pub excluded_export_fields: Vec<String>,
    /// Delay before the initial dataset is delivered
    #[serde(with = "millis")]
    pub load_delay: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_choices: vec![5, 10, 25, 50],
            default_column_width: DEFAULT_COLUMN_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
            sheet_name: "Table Data".to_string(),
            export_file_stem: "table-data".to_string(),
            excluded_export_fields: vec!["avatar".to_string()],
            load_delay: Duration::from_millis(800),
        }
    }
}

impl TableOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial page size (zero falls back to the default).
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = if size == 0 { DEFAULT_PAGE_SIZE } else { size };
        self
    }

    /// Set the default column width.
    pub fn default_column_width(mut self, width: u32) -> Self {
        self.default_column_width = width.max(1);
        self
    }

    /// Set the resize floor.
    pub fn min_column_width(mut self, width: u32) -> Self {
        self.min_column_width = width.max(1);
        self
    }

    /// Set the export sheet name.
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Set the export file stem.
    pub fn export_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.export_file_stem = stem.into();
        self
    }

    /// Exclude an additional field from exports.
    pub fn exclude_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        if !self.excluded_export_fields.contains(&field) {
            self.excluded_export_fields.push(field);
        }
        self
    }

    /// Set the initial load delay.
    pub fn load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    /// Whether a field is dropped from exported records.
    pub fn is_excluded(&self, field: &str) -> bool {
        self.excluded_export_fields.iter().any(|f| f == field)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
