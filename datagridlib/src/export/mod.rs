//! Spreadsheet export.
//!
//! The engine builds an [`ExportSheet`] (sheet name, headers, records) and
//! hands it to a [`SheetExporter`]. How the sheet is encoded on disk is the
//! exporter's business; the engine only decides which rows and fields go in.
//!
//! ## Example
//!
//! Two exporters ship with the crate: [`XlsxExporter`] writes a workbook
//! with one named worksheet, [`CsvExporter`] a plain CSV file.
//!
//! ```rust
//! use datagridlib::export::{CsvExporter, SheetExporter};
//! use datagridlib::{demo_rows, TableEngine};
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let mut engine = TableEngine::new();
//! engine.load_rows(demo_rows(5)).unwrap();
//! engine.toggle_row_selection("row-2");
//!
//! let mut exporter = CsvExporter::new(dir.path());
//! let report = engine.export_selection(&mut exporter).unwrap();
//! assert_eq!(report.records, 1);
//! assert!(report.path.ends_with("table-data.csv"));
//! ```

pub mod csv;
pub mod xlsx;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{CellValue, Column, Row, ID_FIELD};
use crate::error::TableError;
use crate::options::TableOptions;
use crate::Result;

pub use self::csv::CsvExporter;
pub use self::xlsx::XlsxExporter;

/// One exported row: field name → value, in output order.
pub type ExportRecord = IndexMap<String, CellValue>;

/// A single named sheet ready to be written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSheet {
    /// Sheet name
    pub name: String,
    /// Header row
    pub headers: Vec<String>,
    /// Data rows
    pub records: Vec<ExportRecord>,
}

impl ExportSheet {
    /// Build a sheet from rows, dropping the fields `options` excludes.
    ///
    /// Headers follow the first appearance of each field across records.
    /// With no records, headers fall back to the identifier plus the
    /// fields the columns read, so the sheet still has a header row.
    pub fn from_rows(rows: &[&Row], columns: &[Column], options: &TableOptions) -> Self {
        let records: Vec<ExportRecord> = rows.iter().map(|r| to_record(r, options)).collect();

        let mut headers: Vec<String> = Vec::new();
        let mut push_header = |key: &str| {
            if !options.is_excluded(key) && !headers.iter().any(|h| h == key) {
                headers.push(key.to_string());
            }
        };

        if records.is_empty() {
            push_header(ID_FIELD);
            for column in columns {
                push_header(&column.field);
            }
        } else {
            for record in &records {
                for key in record.keys() {
                    push_header(key);
                }
            }
        }

        ExportSheet {
            name: options.sheet_name.clone(),
            headers,
            records,
        }
    }

    /// Cell text for `header` in record `index` (empty when absent).
    pub fn cell(&self, index: usize, header: &str) -> String {
        self.records
            .get(index)
            .and_then(|r| r.get(header))
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}

fn to_record(row: &Row, options: &TableOptions) -> ExportRecord {
    let mut record = ExportRecord::new();
    if !options.is_excluded(ID_FIELD) {
        record.insert(ID_FIELD.to_string(), CellValue::from(row.id()));
    }
    for (key, value) in row.fields() {
        if key != ID_FIELD && !options.is_excluded(key) {
            record.insert(key.to_string(), value.clone());
        }
    }
    record
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    /// Where the file was written
    pub path: PathBuf,
    /// Sheet name written
    pub sheet: String,
    /// Number of data rows written
    pub records: usize,
}

/// Create the export directory if it does not exist yet.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        std::fs::create_dir_all(dir).map_err(|source| TableError::ExportWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Collaborator that turns a sheet into a downloadable file.
pub trait SheetExporter {
    /// File extension (without dot) of the produced file.
    fn extension(&self) -> &str;

    /// Write `sheet` under `file_name`.
    fn export(&mut self, sheet: &ExportSheet, file_name: &str) -> Result<ExportReport>;
}
