//! Output formatting: present the visible page as a table.
//!
//! - **PageTable**: Table-ready headers, rows and footer
//! - **TableRow**: Individual row with id, selection flag and formatted values
//!
//! PageTable is a pure presentation layer - it only formats data into strings.
//! Sorting, paging and selection all happen in the engine.
//!
//! ## Example
//!
//! ```rust
//! use datagridlib::output::PageTable;
//! use datagridlib::{demo_rows, TableEngine};
//!
//! let mut engine = TableEngine::new();
//! engine.load_rows(demo_rows(12)).unwrap();
//!
//! let table = PageTable::from_engine(&engine);
//! assert_eq!(table.rows.len(), 10);
//! assert_eq!(table.footer.showing, "Showing 1 to 10 of 12 results");
//! ```

pub mod table;

pub use table::{PageFooter, PageTable, TableRow};
