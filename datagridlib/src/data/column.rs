//! Column definitions.
//!
//! Columns are configuration supplied once. The engine reorders and resizes
//! them but never edits a definition.

use serde::{Deserialize, Serialize};

/// Describes one projected row field and what the user may do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier
    pub id: String,
    /// Header label (may be empty)
    pub label: String,
    /// Row field the column reads
    pub field: String,
    /// Header click cycles the sort
    #[serde(default)]
    pub sortable: bool,
    /// Width can be changed by a resize gesture
    #[serde(default)]
    pub resizable: bool,
    /// Column can be dragged to a new position
    #[serde(default)]
    pub reorderable: bool,
    /// Column stays pinned while scrolling horizontally
    #[serde(default)]
    pub sticky: bool,
    /// Column renders the row-selection checkbox
    #[serde(default)]
    pub checkbox: bool,
    /// Column renders the row's avatar as initials of its name
    #[serde(default)]
    pub avatar: bool,
}

impl Column {
    /// Create a column with all capabilities disabled.
    pub fn new(id: impl Into<String>, label: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field: field.into(),
            sortable: false,
            resizable: false,
            reorderable: false,
            sticky: false,
            checkbox: false,
            avatar: false,
        }
    }

    /// Builder: allow sorting
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Builder: allow resizing
    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Builder: allow reordering
    pub fn reorderable(mut self) -> Self {
        self.reorderable = true;
        self
    }

    /// Builder: pin the column
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// Builder: mark as the selection checkbox column
    pub fn checkbox(mut self) -> Self {
        self.checkbox = true;
        self
    }

    /// Builder: mark as the avatar column
    pub fn avatar(mut self) -> Self {
        self.avatar = true;
        self
    }
}

/// The stock column layout: selection checkbox, avatar, then the data
/// columns.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("select", "", "id").sticky().checkbox(),
        Column::new("avatar", "", "avatar").sticky().avatar(),
        Column::new("name", "Name", "name")
            .sticky()
            .resizable()
            .reorderable(),
        Column::new("description", "Description", "description")
            .resizable()
            .reorderable(),
        Column::new("amount", "Amount", "amount")
            .sortable()
            .resizable()
            .reorderable(),
        Column::new("source", "Source", "source")
            .resizable()
            .reorderable(),
        Column::new("tooltip", "Info", "tooltip")
            .resizable()
            .reorderable(),
    ]
}
