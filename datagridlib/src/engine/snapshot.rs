//! Serializable read model of an engine.

use serde::{Deserialize, Serialize};

use super::{PageInfo, SelectionSummary, SortDirection, SortSpec, TableEngine};
use crate::data::{Column, Row};

/// A column as a renderer sees it: definition plus live layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnView {
    #[serde(flatten)]
    pub column: Column,
    /// Effective width
    pub width: u32,
    /// Sort direction applied to this column
    pub sort: SortDirection,
}

/// Everything a rendering collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub loading: bool,
    /// Columns in display order
    pub columns: Vec<ColumnView>,
    pub sorting: SortSpec,
    pub page: PageInfo,
    /// Page sizes a pagination control offers
    pub page_size_choices: Vec<usize>,
    pub selection: SelectionSummary,
    /// Ids of the selected rows that exist, in current order
    pub selected_ids: Vec<String>,
    /// Rows on the visible page
    pub rows: Vec<Row>,
}

impl TableSnapshot {
    pub(crate) fn capture(engine: &TableEngine) -> Self {
        let columns = engine
            .ordered_columns()
            .into_iter()
            .map(|c| ColumnView {
                column: c.clone(),
                width: engine.column_width(&c.id),
                sort: engine.sorting().direction_for(&c.id),
            })
            .collect();

        TableSnapshot {
            loading: engine.is_loading(),
            columns,
            sorting: engine.sorting().clone(),
            page: engine.page_info(),
            page_size_choices: engine.options().page_size_choices.clone(),
            selection: engine.selection_summary(),
            selected_ids: engine
                .selected_rows()
                .iter()
                .map(|r| r.id().to_string())
                .collect(),
            rows: engine.page_rows().into_iter().cloned().collect(),
        }
    }

    /// Whether a visible row is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|s| s == id)
    }
}
