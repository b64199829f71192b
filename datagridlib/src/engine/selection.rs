//! Row selection set and its summary.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::data::Row;

/// Tri-state of the header "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Every loaded row is selected
    Checked,
    /// Some, but not all, loaded rows are selected
    Indeterminate,
    /// No loaded row is selected
    Unchecked,
}

/// Selection figures over the full loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Selected rows present in the dataset
    pub selected: usize,
    /// Rows in the dataset
    pub total: usize,
    /// Header checkbox state
    pub state: CheckState,
}

impl SelectionSummary {
    /// Every row is selected (and there is at least one).
    pub fn all_selected(&self) -> bool {
        self.state == CheckState::Checked
    }

    /// At least one row is selected.
    pub fn any_selected(&self) -> bool {
        self.selected > 0
    }
}

/// Set of selected row identifiers.
///
/// Ids that do not match a loaded row are kept but ignored by every read
/// that goes through [`RowSelection::summarize`] or the engine's selected
/// row accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSelection {
    ids: HashSet<String>,
}

impl RowSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is marked selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Remove every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection with exactly the given rows.
    pub fn select_all(&mut self, rows: &[Row]) {
        self.ids = rows.iter().map(|r| r.id().to_string()).collect();
    }

    /// Raw number of marked ids, stale ones included.
    pub fn marked(&self) -> usize {
        self.ids.len()
    }

    /// Summarize against the loaded rows.
    pub fn summarize(&self, rows: &[Row]) -> SelectionSummary {
        let selected = rows.iter().filter(|r| self.contains(r.id())).count();
        let total = rows.len();
        let state = if total > 0 && selected == total {
            CheckState::Checked
        } else if selected > 0 {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        };

        SelectionSummary {
            selected,
            total,
            state,
        }
    }
}
