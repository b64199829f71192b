//! Table-ready data for the visible page.
//!
//! `PageTable` is a presentation-ready structure that can be consumed by
//! templates directly or serialized to JSON.
//!
//! The data flow is:
//! 1. Engine state (rows, layout, selection, sort, pagination)
//! 2. PageTable (formatted strings for the visible page)
//!
//! PageTable only formats: no sorting, paging or selection logic lives
//! here. All of that is computed by the engine.

use serde::{Deserialize, Serialize};

use crate::data::{CellValue, Column, Row};
use crate::engine::{CheckState, SortDirection, TableEngine};

/// Mark for a selected row / fully selected header.
pub const MARK_CHECKED: &str = "[x]";
/// Mark for an unselected row / empty selection header.
pub const MARK_UNCHECKED: &str = "[ ]";
/// Header mark when only some rows are selected.
pub const MARK_PARTIAL: &str = "[-]";

/// Characters per width unit used to truncate text cells.
const UNITS_PER_CHAR: u32 = 8;

/// A single data row on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row identifier
    pub id: String,
    /// Whether the row is selected
    pub selected: bool,
    /// Cell text for each column, in column order
    pub values: Vec<String>,
}

/// Summary lines shown under the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFooter {
    /// "Showing a to b of n results"
    pub showing: String,
    /// "Page i of k"
    pub page: String,
    /// "n of m row(s) selected"
    pub selection: String,
    /// "Rows per page: 5 [10] 25 50", current size bracketed
    pub rows_per_page: String,
}

/// Table-ready page data.
///
/// Templates iterate over headers/rows/footer and apply styling only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTable {
    /// Header text for each column (sort arrow and select-all mark included)
    pub headers: Vec<String>,
    /// Column ids, parallel to `headers`
    pub column_ids: Vec<String>,
    /// Effective width of each column
    pub widths: Vec<u32>,
    /// Visible rows
    pub rows: Vec<TableRow>,
    pub footer: PageFooter,
    /// Whether the dataset has not arrived yet
    pub loading: bool,
}

impl PageTable {
    /// Format the engine's visible page.
    pub fn from_engine(engine: &TableEngine) -> Self {
        let columns = engine.ordered_columns();
        let summary = engine.selection_summary();
        let sorting = engine.sorting();

        let headers = columns
            .iter()
            .map(|c| {
                if c.checkbox {
                    header_mark(summary.state).to_string()
                } else {
                    format_header(c, sorting.direction_for(&c.id))
                }
            })
            .collect();
        let widths = columns.iter().map(|c| engine.column_width(&c.id)).collect();

        let rows = engine
            .page_rows()
            .into_iter()
            .map(|row| {
                let selected = engine.is_selected(row.id());
                TableRow {
                    id: row.id().to_string(),
                    selected,
                    values: columns
                        .iter()
                        .map(|c| format_cell(c, row, selected, engine.column_width(&c.id)))
                        .collect(),
                }
            })
            .collect();

        let info = engine.page_info();
        let footer = PageFooter {
            showing: format!(
                "Showing {} to {} of {} results",
                info.showing_from, info.showing_to, info.total_rows
            ),
            page: format!(
                "Page {} of {}",
                info.page_index.saturating_add(1),
                info.page_count.max(1)
            ),
            selection: format!("{} of {} row(s) selected", summary.selected, summary.total),
            rows_per_page: rows_per_page(&engine.options().page_size_choices, info.page_size),
        };

        PageTable {
            headers,
            column_ids: columns.iter().map(|c| c.id.clone()).collect(),
            widths,
            rows,
            footer,
            loading: engine.is_loading(),
        }
    }
}

fn header_mark(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => MARK_CHECKED,
        CheckState::Indeterminate => MARK_PARTIAL,
        CheckState::Unchecked => MARK_UNCHECKED,
    }
}

fn format_header(column: &Column, direction: SortDirection) -> String {
    match direction {
        SortDirection::Ascending => format!("{} ↑", column.label),
        SortDirection::Descending => format!("{} ↓", column.label),
        SortDirection::Unsorted => column.label.clone(),
    }
}

fn format_cell(column: &Column, row: &Row, selected: bool, width: u32) -> String {
    if column.checkbox {
        let mark = if selected { MARK_CHECKED } else { MARK_UNCHECKED };
        return mark.to_string();
    }
    if column.avatar {
        return initials(&row.display("name"));
    }
    match row.get(&column.field) {
        Some(CellValue::Number(n)) => format!("{:.2}", n),
        Some(CellValue::Text(s)) => truncate(s, (width / UNITS_PER_CHAR).max(4) as usize),
        None => row.display(&column.field),
    }
}

fn rows_per_page(choices: &[usize], current: usize) -> String {
    let mut sizes: Vec<String> = choices
        .iter()
        .map(|&size| {
            if size == current {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect();
    if !choices.contains(&current) {
        sizes.push(format!("[{}]", current));
    }
    format!("Rows per page: {}", sizes.join(" "))
}

/// Avatar stand-in: first letter of up to two words.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
