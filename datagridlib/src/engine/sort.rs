//! Sort specification and row-order projection.
//!
//! Rows are never reordered in place. The engine keeps a permutation of
//! row indexes (the view) and re-projects it whenever the sort changes:
//!
//! - an active sort stably re-sorts the current view by the column's field
//! - direction `Unsorted` restores load order
//!
//! Only numbers are compared. Rows holding a number for the field are
//! ordered among themselves; rows without one keep their slot in the view.
//! A field with no numbers at all leaves the view untouched, whatever the
//! direction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
    /// No ordering requested
    #[default]
    Unsorted,
}

impl SortDirection {
    /// Next direction in the header-click cycle: asc → desc → none → asc.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            "none" | "unsorted" | "off" => Ok(SortDirection::Unsorted),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// The (column, direction) pair currently governing row order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column the sort was requested on
    pub column: Option<String>,
    /// Requested direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Whether the spec actually orders rows.
    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.direction != SortDirection::Unsorted
    }

    /// Direction applied to `column_id`, `Unsorted` if another column is
    /// sorted or no sort is active.
    pub fn direction_for(&self, column_id: &str) -> SortDirection {
        match &self.column {
            Some(c) if c == column_id => self.direction,
            _ => SortDirection::Unsorted,
        }
    }
}

/// Re-project `view` for a sort on `field`.
///
/// Returns `true` if the field is numeric on at least one row and the view
/// was re-projected, `false` when the order was kept.
pub(crate) fn project(
    rows: &[Row],
    view: &mut Vec<usize>,
    field: Option<&str>,
    direction: SortDirection,
) -> bool {
    let Some(field) = field else {
        return false;
    };
    if !rows.iter().any(|r| r.number(field).is_some()) {
        return false;
    }

    if direction == SortDirection::Unsorted {
        *view = (0..rows.len()).collect();
        return true;
    }

    // (slot in view, row index, key) for rows that hold a number
    let keyed: Vec<(usize, usize, f64)> = view
        .iter()
        .enumerate()
        .filter_map(|(slot, &i)| rows[i].number(field).map(|key| (slot, i, key)))
        .collect();

    let mut ordered: Vec<(usize, f64)> = keyed.iter().map(|&(_, i, key)| (i, key)).collect();
    // slice::sort_by is stable: equal keys keep their current relative order
    let descending = direction == SortDirection::Descending;
    ordered.sort_by(|a, b| {
        let ord = a.1.total_cmp(&b.1);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });

    for (&(slot, _, _), &(i, _)) in keyed.iter().zip(&ordered) {
        view[slot] = i;
    }
    true
}
