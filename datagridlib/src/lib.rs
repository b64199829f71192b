//! # datagridlib
//!
//! A state engine for interactive data tables: sorting, pagination, column
//! reordering and resizing, row selection and spreadsheet export.
//!
//! ## Overview
//!
//! The engine is the single source of truth for one table. Rendering is an
//! external concern: a surface reads a snapshot and calls engine operations.
//!
//! - **Data**: rows (identifier + ordered scalar fields) and column definitions
//! - **Engine**: column layout, selection, sort and pagination as one unit
//! - **Gestures**: resize and drag interactions turned into engine calls
//! - **Handle**: weak access for collaborators, plus the deferred initial load
//! - **Export**: selected rows (or all rows) written as a spreadsheet
//! - **Output**: the visible page formatted for display
//!
//! ## Features
//!
//! - **Sort as a projection**: rows stay in load order; sorting reorders a view
//! - **Whole-dataset selection**: select-all covers every row, not just the page
//! - **Pure data types**: no terminal I/O; files are only touched by the
//!   exporters and `JsonFileSource`
//!
//! ## Example
//!
//! ```rust
//! use datagridlib::{demo_rows, SortDirection, TableEngine, XlsxExporter};
//! use tempfile::tempdir;
//!
//! let mut engine = TableEngine::new();
//! engine.load_rows(demo_rows(50)).unwrap();
//!
//! // Sort by amount, largest first, and look at the second page
//! engine.set_sorting("amount", SortDirection::Descending);
//! engine.next_page();
//! assert_eq!(engine.page_rows().len(), 10);
//!
//! // Select two rows and export them
//! engine.toggle_row_selection("row-3");
//! engine.toggle_row_selection("row-7");
//! let dir = tempdir().unwrap();
//! let report = engine.export_selection(&mut XlsxExporter::new(dir.path())).unwrap();
//! assert_eq!(report.records, 2);
//! assert!(report.path.ends_with("table-data.xlsx"));
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod export;
pub mod gesture;
pub mod handle;
pub mod options;
pub mod output;

pub use data::{default_columns, demo_rows, CellValue, Column, Row, DEMO_ROW_COUNT, ID_FIELD};
pub use engine::{
    CheckState, ColumnView, PageInfo, Pagination, RowSelection, SelectionSummary, SortDirection,
    SortSpec, TableEngine, TableSnapshot,
};
pub use error::TableError;
pub use export::{
    CsvExporter, ExportRecord, ExportReport, ExportSheet, SheetExporter, XlsxExporter,
};
pub use gesture::{ColumnDrag, ResizeGesture};
pub use handle::{
    shared, DataSource, DeferredLoad, JsonFileSource, LoadStatus, SharedEngine, StaticSource,
    TableHandle,
};
pub use options::TableOptions;
pub use output::{PageFooter, PageTable, TableRow};

/// Result type for datagridlib operations
pub type Result<T> = std::result::Result<T, TableError>;
