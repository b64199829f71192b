//! The table state engine.
//!
//! `TableEngine` is the single source of truth for one table: rows, column
//! layout, selection, sort and pagination. Every mutation runs to completion
//! synchronously; derived values (visible page, selection summary) are
//! computed on read.
//!
//! Rows are stored once, in load order. Sorting re-projects an index
//! permutation (see [`sort`]) so load order can always be restored.
//!
//! ## Example
//!
//! ```rust
//! use datagridlib::{demo_rows, SortDirection, TableEngine};
//!
//! let mut engine = TableEngine::new();
//! engine.load_rows(demo_rows(50)).unwrap();
//!
//! engine.set_sorting("amount", SortDirection::Ascending);
//! engine.set_page_index(4);
//! assert_eq!(engine.page_rows().len(), 10);
//!
//! engine.toggle_row_selection("row-3");
//! assert_eq!(engine.selected_rows().len(), 1);
//! ```

pub mod pagination;
pub mod selection;
pub mod snapshot;
pub mod sort;

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, warn};

use crate::data::{default_columns, Column, Row};
use crate::error::TableError;
use crate::export::{ExportReport, ExportSheet, SheetExporter};
use crate::options::TableOptions;
use crate::Result;

pub use pagination::{PageInfo, Pagination};
pub use selection::{CheckState, RowSelection, SelectionSummary};
pub use snapshot::{ColumnView, TableSnapshot};
pub use sort::{SortDirection, SortSpec};

/// State container for one interactive table.
#[derive(Debug, Clone)]
pub struct TableEngine {
    options: TableOptions,
    columns: Vec<Column>,
    column_order: Vec<String>,
    column_sizing: BTreeMap<String, u32>,
    rows: Vec<Row>,
    view: Vec<usize>,
    selection: RowSelection,
    sorting: SortSpec,
    pagination: Pagination,
    loading: bool,
}

impl Default for TableEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TableEngine {
    /// Engine with the stock columns and default options.
    pub fn new() -> Self {
        Self::with_columns(default_columns(), TableOptions::default())
    }

    /// Engine with custom columns and options. Starts empty and loading.
    pub fn with_columns(columns: Vec<Column>, options: TableOptions) -> Self {
        let column_order = columns.iter().map(|c| c.id.clone()).collect();
        let pagination = Pagination::new(options.page_size);
        Self {
            options,
            columns,
            column_order,
            column_sizing: BTreeMap::new(),
            rows: Vec::new(),
            view: Vec::new(),
            selection: RowSelection::new(),
            sorting: SortSpec::default(),
            pagination,
            loading: true,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Deliver the initial dataset. Allowed once per lifecycle.
    ///
    /// Any sort requested while loading is applied to the new rows, and the
    /// page index is brought back inside the valid range.
    pub fn load_rows(&mut self, rows: Vec<Row>) -> Result<()> {
        if !self.loading {
            return Err(TableError::AlreadyLoaded);
        }

        {
            let mut seen = HashSet::with_capacity(rows.len());
            for row in &rows {
                if !seen.insert(row.id()) {
                    return Err(TableError::DuplicateRowId(row.id().to_string()));
                }
            }
        }

        self.view = (0..rows.len()).collect();
        self.rows = rows;
        self.loading = false;
        if self.sorting.is_active() {
            self.reproject();
        }
        self.pagination.clamp(self.rows.len());

        info!(rows = self.rows.len(), "dataset loaded");
        Ok(())
    }

    /// Tear the whole state down to what `with_columns` produced.
    pub fn reset(&mut self) {
        let columns = std::mem::take(&mut self.columns);
        let options = std::mem::take(&mut self.options);
        *self = Self::with_columns(columns, options);
        debug!("table state reset");
    }

    /// True until the initial dataset arrives.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Engine configuration.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------

    /// Column definitions in configuration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column definition by id.
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Current column order.
    pub fn column_order(&self) -> &[String] {
        &self.column_order
    }

    /// Column definitions in display order.
    pub fn ordered_columns(&self) -> Vec<&Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.column(id))
            .collect()
    }

    /// Explicit widths set so far.
    pub fn column_sizing(&self) -> &BTreeMap<String, u32> {
        &self.column_sizing
    }

    /// Effective width of a column.
    pub fn column_width(&self, id: &str) -> u32 {
        self.column_sizing
            .get(id)
            .copied()
            .unwrap_or(self.options.default_column_width)
    }

    /// Replace the column order.
    ///
    /// `order` must contain every column id exactly once; otherwise the
    /// order is left unchanged.
    pub fn set_column_order(&mut self, order: Vec<String>) -> Result<()> {
        if order.len() != self.columns.len() {
            return Err(TableError::InvalidColumnOrder(format!(
                "expected {} columns, got {}",
                self.columns.len(),
                order.len()
            )));
        }

        let mut seen = HashSet::with_capacity(order.len());
        for id in &order {
            if self.column(id).is_none() {
                return Err(TableError::InvalidColumnOrder(format!(
                    "unknown column '{}'",
                    id
                )));
            }
            if !seen.insert(id.as_str()) {
                return Err(TableError::InvalidColumnOrder(format!(
                    "column '{}' appears more than once",
                    id
                )));
            }
        }

        debug!(order = ?order, "column order changed");
        self.column_order = order;
        Ok(())
    }

    /// Merge widths into the current sizing.
    ///
    /// Widths are taken as given apart from zero, which is rejected before
    /// anything is merged.
    pub fn set_column_sizing<I, K>(&mut self, sizing: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let sizing: Vec<(String, u32)> = sizing.into_iter().map(|(k, w)| (k.into(), w)).collect();
        if let Some((column, width)) = sizing.iter().find(|(_, w)| *w == 0) {
            return Err(TableError::InvalidColumnWidth {
                column: column.clone(),
                width: *width,
            });
        }

        for (column, width) in sizing {
            debug!(column = %column, width, "column resized");
            self.column_sizing.insert(column, width);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Rows and sorting
    // ------------------------------------------------------------------

    /// Rows in load order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows in current (sorted) order.
    pub fn sorted_rows(&self) -> Vec<&Row> {
        self.view.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Current sort specification.
    pub fn sorting(&self) -> &SortSpec {
        &self.sorting
    }

    /// Record a sort and re-project row order.
    ///
    /// Only rows holding a number for the column's field move. A column with
    /// no numeric values, or an unknown column, records the request and
    /// keeps the current order for every direction.
    pub fn set_sorting(&mut self, column_id: &str, direction: SortDirection) {
        self.sorting = SortSpec {
            column: Some(column_id.to_string()),
            direction,
        };
        let reordered = self.reproject();
        if !reordered && direction != SortDirection::Unsorted && !self.rows.is_empty() {
            warn!(column = column_id, "sort ignored: column has no numeric values");
        }
        debug!(column = column_id, ?direction, "sorting changed");
    }

    /// Header-click sort cycle for a sortable column.
    ///
    /// Returns the new direction, or `None` if the column is unknown or not
    /// sortable (nothing changes).
    pub fn cycle_sort(&mut self, column_id: &str) -> Option<SortDirection> {
        if !self.column(column_id)?.sortable {
            return None;
        }
        // another column's sort counts as unsorted here, so the cycle starts at ascending
        let next = self.sorting.direction_for(column_id).cycle();
        self.set_sorting(column_id, next);
        Some(next)
    }

    fn reproject(&mut self) -> bool {
        let field = self
            .sorting
            .column
            .as_deref()
            .and_then(|id| self.column(id))
            .map(|c| c.field.clone());
        sort::project(
            &self.rows,
            &mut self.view,
            field.as_deref(),
            self.sorting.direction,
        )
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Raw selection set (may hold stale ids).
    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    /// Whether a row id is marked selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Flip selection of one row id. Unknown ids are recorded but inert.
    pub fn toggle_row_selection(&mut self, id: &str) {
        let selected = self.selection.toggle(id);
        debug!(id, selected, "row selection toggled");
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        debug!("selection cleared");
    }

    /// Select every loaded row, or clear if all are already selected.
    pub fn toggle_all_selection(&mut self) {
        if self.selection_summary().all_selected() {
            self.selection.clear();
        } else {
            self.selection.select_all(&self.rows);
        }
        debug!(selected = self.selection.marked(), "toggled all rows");
    }

    /// Selected rows that exist in the dataset, in current order.
    pub fn selected_rows(&self) -> Vec<&Row> {
        self.view
            .iter()
            .map(|&i| &self.rows[i])
            .filter(|r| self.selection.contains(r.id()))
            .collect()
    }

    /// Selection figures over the full dataset.
    pub fn selection_summary(&self) -> SelectionSummary {
        self.selection.summarize(&self.rows)
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// Current pagination window.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Set the page index as given. Past-the-end indexes show no rows.
    pub fn set_page_index(&mut self, index: usize) {
        self.pagination.page_index = index;
        debug!(index, "page index changed");
    }

    /// Set the page size and return to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        self.pagination = Pagination {
            page_index: 0,
            page_size: size,
        };
        debug!(size, "page size changed");
        Ok(())
    }

    /// Go to the first page.
    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    /// Go back one page, stopping at the first.
    pub fn previous_page(&mut self) {
        let index = self.pagination.page_index.saturating_sub(1);
        self.set_page_index(index.min(self.pagination.last_page(self.rows.len())));
    }

    /// Go forward one page, stopping at the last.
    pub fn next_page(&mut self) {
        let last = self.pagination.last_page(self.rows.len());
        self.set_page_index(self.pagination.page_index.saturating_add(1).min(last));
    }

    /// Go to the last page.
    pub fn last_page(&mut self) {
        self.set_page_index(self.pagination.last_page(self.rows.len()));
    }

    /// Rows visible on the current page, in current order.
    pub fn page_rows(&self) -> Vec<&Row> {
        let (start, end) = self.pagination.bounds(self.view.len());
        self.view[start..end].iter().map(|&i| &self.rows[i]).collect()
    }

    /// Pagination figures for controls.
    pub fn page_info(&self) -> PageInfo {
        self.pagination.info(self.rows.len())
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Sheet holding the selected rows, or every row when none is selected.
    pub fn export_sheet(&self) -> ExportSheet {
        let selected = self.selected_rows();
        let rows = if selected.is_empty() {
            self.sorted_rows()
        } else {
            selected
        };
        ExportSheet::from_rows(&rows, &self.columns, &self.options)
    }

    /// Build the export sheet and hand it to `exporter`.
    pub fn export_selection(&self, exporter: &mut dyn SheetExporter) -> Result<ExportReport> {
        let sheet = self.export_sheet();
        let file_name = format!("{}.{}", self.options.export_file_stem, exporter.extension());
        debug!(records = sheet.records.len(), file = %file_name, "exporting");
        exporter.export(&sheet, &file_name)
    }

    /// Serializable read model for renderers.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_rows;

    fn loaded(n: usize) -> TableEngine {
        let mut engine = TableEngine::new();
        engine.load_rows(demo_rows(n)).unwrap();
        engine
    }

    fn amount_engine(amounts: &[f64]) -> TableEngine {
        let rows = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| Row::new(format!("row-{}", i + 1)).with("name", "x").with("amount", *a))
            .collect();
        let mut engine = TableEngine::new();
        engine.load_rows(rows).unwrap();
        engine
    }

    fn ids(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.id().to_string()).collect()
    }

    fn amounts(engine: &TableEngine) -> Vec<f64> {
        engine
            .sorted_rows()
            .iter()
            .map(|r| r.number("amount").unwrap())
            .collect()
    }

    #[test]
    fn test_new_engine_is_loading_and_empty() {
        let engine = TableEngine::new();
        assert!(engine.is_loading());
        assert!(engine.rows().is_empty());
        assert_eq!(engine.column_order().len(), 7);
        assert_eq!(engine.pagination(), Pagination::new(10));
    }

    #[test]
    fn test_load_once() {
        let mut engine = loaded(3);
        assert!(!engine.is_loading());
        assert!(matches!(
            engine.load_rows(demo_rows(2)),
            Err(TableError::AlreadyLoaded)
        ));
        assert_eq!(engine.rows().len(), 3);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut engine = TableEngine::new();
        let rows = vec![Row::new("a"), Row::new("b"), Row::new("a")];
        assert!(matches!(
            engine.load_rows(rows),
            Err(TableError::DuplicateRowId(id)) if id == "a"
        ));
        assert!(engine.is_loading());
    }

    #[test]
    fn test_load_clamps_page_index() {
        let mut engine = TableEngine::new();
        engine.set_page_index(9);
        engine.load_rows(demo_rows(25)).unwrap();
        assert_eq!(engine.pagination().page_index, 2);
    }

    #[test]
    fn test_sort_requested_while_loading_applies_on_arrival() {
        let mut engine = TableEngine::new();
        engine.set_sorting("amount", SortDirection::Descending);
        engine.load_rows(demo_rows(20)).unwrap();

        let values = amounts(&engine);
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_reset() {
        let mut engine = loaded(10);
        engine.toggle_row_selection("row-1");
        engine.set_page_size(5).unwrap();
        engine.set_column_sizing([("name", 220)]).unwrap();

        engine.reset();
        assert!(engine.is_loading());
        assert!(engine.rows().is_empty());
        assert_eq!(engine.selection().marked(), 0);
        assert!(engine.column_sizing().is_empty());
        assert_eq!(engine.pagination().page_size, 10);
        engine.load_rows(demo_rows(2)).unwrap();
    }

    #[test]
    fn test_column_order_valid_permutation() {
        let mut engine = TableEngine::new();
        let mut order: Vec<String> = engine.column_order().to_vec();
        order.swap(2, 4);
        engine.set_column_order(order.clone()).unwrap();

        assert_eq!(engine.column_order(), order.as_slice());
        assert_eq!(engine.ordered_columns()[2].id, "amount");
    }

    #[test]
    fn test_column_order_rejects_non_permutations() {
        let mut engine = TableEngine::new();
        let original = engine.column_order().to_vec();

        let mut missing = original.clone();
        missing.pop();
        assert!(engine.set_column_order(missing).is_err());

        let mut duplicated = original.clone();
        duplicated[1] = duplicated[0].clone();
        assert!(engine.set_column_order(duplicated).is_err());

        let mut unknown = original.clone();
        unknown[0] = "nope".to_string();
        assert!(engine.set_column_order(unknown).is_err());

        assert_eq!(engine.column_order(), original.as_slice());
    }

    #[test]
    fn test_column_sizing_merges() {
        let mut engine = TableEngine::new();
        assert_eq!(engine.column_width("name"), 150);

        engine.set_column_sizing([("name", 220)]).unwrap();
        engine.set_column_sizing([("amount", 90)]).unwrap();

        assert_eq!(engine.column_width("name"), 220);
        assert_eq!(engine.column_width("amount"), 90);
        assert_eq!(engine.column_sizing().len(), 2);
    }

    #[test]
    fn test_column_sizing_rejects_zero() {
        let mut engine = TableEngine::new();
        let result = engine.set_column_sizing([("name", 200), ("amount", 0)]);

        assert!(matches!(result, Err(TableError::InvalidColumnWidth { .. })));
        assert!(engine.column_sizing().is_empty());
    }

    #[test]
    fn test_sort_amount_scenario() {
        let mut engine = amount_engine(&[30.0, 10.0, 20.0]);

        engine.set_sorting("amount", SortDirection::Ascending);
        assert_eq!(amounts(&engine), vec![10.0, 20.0, 30.0]);

        engine.set_sorting("amount", SortDirection::Descending);
        assert_eq!(amounts(&engine), vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_sort_reversal_with_distinct_keys() {
        let mut engine = loaded(50);
        engine.set_sorting("amount", SortDirection::Ascending);
        let asc = ids(&engine.sorted_rows());

        engine.set_sorting("amount", SortDirection::Descending);
        let mut desc = ids(&engine.sorted_rows());
        desc.reverse();

        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut engine = amount_engine(&[2.0, 1.0, 2.0, 1.0, 2.0]);
        engine.set_sorting("amount", SortDirection::Ascending);
        assert_eq!(
            ids(&engine.sorted_rows()),
            vec!["row-2", "row-4", "row-1", "row-3", "row-5"]
        );

        engine.set_sorting("amount", SortDirection::Descending);
        assert_eq!(
            ids(&engine.sorted_rows()),
            vec!["row-1", "row-3", "row-5", "row-2", "row-4"]
        );
    }

    #[test]
    fn test_non_numeric_sort_is_noop_but_recorded() {
        let mut engine = loaded(10);
        engine.set_sorting("amount", SortDirection::Descending);
        let before = ids(&engine.sorted_rows());

        for direction in [
            SortDirection::Ascending,
            SortDirection::Descending,
            SortDirection::Unsorted,
        ] {
            engine.set_sorting("name", direction);
            assert_eq!(ids(&engine.sorted_rows()), before);
            assert_eq!(engine.sorting().column.as_deref(), Some("name"));
            assert_eq!(engine.sorting().direction, direction);
        }
    }

    #[test]
    fn test_unsorted_restores_load_order() {
        let mut engine = loaded(10);
        let load_order = ids(&engine.rows().iter().collect::<Vec<_>>());

        engine.set_sorting("amount", SortDirection::Ascending);
        assert_ne!(ids(&engine.sorted_rows()), load_order);

        engine.set_sorting("amount", SortDirection::Unsorted);
        assert_eq!(ids(&engine.sorted_rows()), load_order);
        assert!(!engine.sorting().is_active());
    }

    #[test]
    fn test_mixed_amounts_sort_numbers_only() {
        let rows = vec![
            Row::new("a").with("amount", 30.0),
            Row::new("b").with("amount", 10.0),
            Row::new("c").with("amount", 20.0),
            Row::new("d").with("amount", "n/a"),
            Row::new("e"),
        ];
        let mut engine = TableEngine::new();
        engine.load_rows(rows).unwrap();

        engine.set_sorting("amount", SortDirection::Ascending);
        assert_eq!(ids(&engine.sorted_rows()), vec!["b", "c", "a", "d", "e"]);

        engine.set_sorting("amount", SortDirection::Descending);
        assert_eq!(ids(&engine.sorted_rows()), vec!["a", "c", "b", "d", "e"]);

        engine.set_sorting("amount", SortDirection::Unsorted);
        assert_eq!(ids(&engine.sorted_rows()), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_rows_are_never_reordered_in_place() {
        let mut engine = loaded(10);
        engine.set_sorting("amount", SortDirection::Descending);
        assert_eq!(engine.rows()[0].id(), "row-1");
    }

    #[test]
    fn test_cycle_sort() {
        let mut engine = loaded(5);
        assert_eq!(engine.cycle_sort("amount"), Some(SortDirection::Ascending));
        assert_eq!(engine.cycle_sort("amount"), Some(SortDirection::Descending));
        assert_eq!(engine.cycle_sort("amount"), Some(SortDirection::Unsorted));
        assert_eq!(engine.cycle_sort("amount"), Some(SortDirection::Ascending));

        assert_eq!(engine.cycle_sort("name"), None);
        assert_eq!(engine.cycle_sort("missing"), None);
        assert_eq!(engine.sorting().column.as_deref(), Some("amount"));
    }

    #[test]
    fn test_selection_scenario() {
        let mut engine = loaded(50);
        engine.toggle_row_selection("row-7");
        engine.toggle_row_selection("row-3");

        assert_eq!(ids(&engine.selected_rows()), vec!["row-3", "row-7"]);
        assert_eq!(engine.export_sheet().records.len(), 2);
    }

    #[test]
    fn test_selected_rows_follow_sort_order() {
        let mut engine = amount_engine(&[3.0, 1.0, 2.0]);
        engine.toggle_row_selection("row-1");
        engine.toggle_row_selection("row-2");
        engine.set_sorting("amount", SortDirection::Ascending);

        assert_eq!(ids(&engine.selected_rows()), vec!["row-2", "row-1"]);
    }

    #[test]
    fn test_stale_selection_is_inert() {
        let mut engine = loaded(3);
        engine.toggle_row_selection("row-99");

        assert!(engine.is_selected("row-99"));
        assert!(engine.selected_rows().is_empty());
        assert_eq!(engine.selection_summary().state, CheckState::Unchecked);
    }

    #[test]
    fn test_toggle_all_is_idempotent_pair() {
        let mut engine = loaded(10);
        engine.toggle_row_selection("row-2");
        let before = engine.selection().clone();

        engine.toggle_all_selection();
        assert_eq!(engine.selected_rows().len(), 10);
        assert_eq!(engine.selection_summary().state, CheckState::Checked);

        engine.toggle_all_selection();
        assert!(engine.selected_rows().is_empty());
        assert_ne!(engine.selection(), &before);

        engine.toggle_all_selection();
        engine.toggle_all_selection();
        assert!(engine.selected_rows().is_empty());
    }

    #[test]
    fn test_toggle_all_covers_every_page() {
        let mut engine = loaded(50);
        engine.set_page_index(2);
        engine.toggle_all_selection();
        assert_eq!(engine.selection_summary().selected, 50);
    }

    #[test]
    fn test_toggle_all_on_empty_dataset() {
        let mut engine = TableEngine::new();
        engine.load_rows(Vec::new()).unwrap();
        engine.toggle_all_selection();
        assert_eq!(engine.selection_summary().state, CheckState::Unchecked);
    }

    #[test]
    fn test_pagination_scenario() {
        let mut engine = loaded(50);
        engine.set_page_index(4);
        let page = ids(&engine.page_rows());
        let expected: Vec<String> = (41..=50).map(|i| format!("row-{}", i)).collect();
        assert_eq!(page, expected);

        engine.set_page_index(5);
        assert!(engine.page_rows().is_empty());
        assert_eq!(engine.pagination().page_index, 5);
    }

    #[test]
    fn test_page_size_resets_index() {
        let mut engine = loaded(50);
        engine.set_page_index(3);
        engine.set_page_size(25).unwrap();
        assert_eq!(engine.pagination().page_index, 0);
        assert_eq!(engine.page_rows().len(), 25);

        assert!(matches!(engine.set_page_size(0), Err(TableError::InvalidPageSize)));
        assert_eq!(engine.pagination().page_size, 25);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut engine = loaded(23);
        engine.previous_page();
        assert_eq!(engine.pagination().page_index, 0);

        engine.next_page();
        engine.next_page();
        engine.next_page();
        assert_eq!(engine.pagination().page_index, 2);

        engine.first_page();
        assert_eq!(engine.pagination().page_index, 0);
        engine.last_page();
        assert_eq!(engine.pagination().page_index, 2);
        assert_eq!(engine.page_rows().len(), 3);
    }

    #[test]
    fn test_huge_page_index_is_an_empty_page() {
        let mut engine = loaded(50);
        engine.set_page_index(usize::MAX);
        assert!(engine.page_rows().is_empty());

        let info = engine.page_info();
        assert_eq!(info.page_index, usize::MAX);
        assert_eq!(info.showing_from, 0);
        assert!(!info.can_next);
        assert!(info.can_previous);

        let snapshot = engine.snapshot();
        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.page.page_index, usize::MAX);

        engine.next_page();
        assert_eq!(engine.pagination().page_index, 4);
    }

    #[test]
    fn test_page_slice_follows_sort() {
        let mut engine = loaded(50);
        engine.set_sorting("amount", SortDirection::Ascending);
        let first_page: Vec<f64> = engine
            .page_rows()
            .iter()
            .map(|r| r.number("amount").unwrap())
            .collect();
        assert_eq!(first_page, amounts(&engine)[..10].to_vec());
    }

    #[test]
    fn test_export_falls_back_to_all_rows() {
        let mut engine = loaded(12);
        let sheet = engine.export_sheet();
        assert_eq!(sheet.records.len(), 12);
        assert!(sheet.records.iter().all(|r| !r.contains_key("avatar")));

        engine.toggle_row_selection("row-4");
        let sheet = engine.export_sheet();
        assert_eq!(sheet.records.len(), 1);
        assert_eq!(sheet.cell(0, "id"), "row-4");
        assert!(!sheet.headers.contains(&"avatar".to_string()));
    }

    #[test]
    fn test_independent_engines() {
        let mut a = loaded(5);
        let b = loaded(5);
        a.toggle_row_selection("row-1");
        a.set_page_size(2).unwrap();

        assert!(b.selected_rows().is_empty());
        assert_eq!(b.pagination().page_size, 10);
    }
}
