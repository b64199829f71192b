//! Table data model: rows, columns and the demo dataset.
//!
//! This module holds the inputs the engine is configured with:
//!
//! - **Rows**: identifier + ordered scalar fields (`Row`, `CellValue`)
//! - **Columns**: field projections with capability flags (`Column`)
//! - **Demo data**: a deterministic dataset used when no source is given
//!
//! ## Example
//!
//! ```rust
//! use datagridlib::data::{default_columns, Row};
//!
//! let row = Row::new("row-1").with("name", "Globex").with("amount", 12.5);
//! assert_eq!(row.number("amount"), Some(12.5));
//! assert_eq!(default_columns().len(), 7);
//! ```

pub mod column;
pub mod demo;
pub mod row;

pub use column::{default_columns, Column};
pub use demo::{demo_rows, DEMO_ROW_COUNT};
pub use row::{CellValue, Row, ID_FIELD};
