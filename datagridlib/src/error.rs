//! Error types for datagridlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving a table engine
#[derive(Error, Debug)]
pub enum TableError {
    /// Engine state was accessed through a handle whose engine is gone
    #[error("no table engine is attached to this handle")]
    EngineDetached,

    /// Engine was accessed re-entrantly while already borrowed
    #[error("table engine is already in use")]
    EngineBusy,

    /// Column order is not a permutation of the column set
    #[error("invalid column order: {0}")]
    InvalidColumnOrder(String),

    /// Column width must be positive
    #[error("invalid width {width} for column '{column}'")]
    InvalidColumnWidth { column: String, width: u32 },

    /// Page size must be positive
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// Column identifier not present in the column configuration
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Column does not allow resizing
    #[error("column '{0}' is not resizable")]
    ColumnNotResizable(String),

    /// Column does not allow reordering
    #[error("column '{0}' is not reorderable")]
    ColumnNotReorderable(String),

    /// The initial dataset was already delivered
    #[error("dataset has already been loaded")]
    AlreadyLoaded,

    /// Two rows share an identifier
    #[error("duplicate row id: {0}")]
    DuplicateRowId(String),

    /// Failed to write an export file
    #[error("failed to write export '{path}': {source}")]
    ExportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX encoding error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
