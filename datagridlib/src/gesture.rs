//! Pointer gestures that translate into engine calls.
//!
//! Gesture state (where a drag started, which column is held) lives here,
//! outside the engine. Each pointer event turns into one discrete engine
//! operation, so the engine never sees half-finished interactions.

use tracing::debug;

use crate::engine::TableEngine;
use crate::error::TableError;
use crate::Result;

/// An in-progress column resize.
///
/// Dropping the value ends the gesture; the last width issued stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeGesture {
    column: String,
    start_x: i32,
    start_width: u32,
    min_width: u32,
}

impl ResizeGesture {
    /// Start resizing `column_id` with the pointer at `x`.
    pub fn begin(engine: &TableEngine, column_id: &str, x: i32) -> Result<Self> {
        let column = engine
            .column(column_id)
            .ok_or_else(|| TableError::UnknownColumn(column_id.to_string()))?;
        if !column.resizable {
            return Err(TableError::ColumnNotResizable(column_id.to_string()));
        }

        Ok(Self {
            column: column.id.clone(),
            start_x: x,
            start_width: engine.column_width(column_id),
            min_width: engine.options().min_column_width,
        })
    }

    /// Column being resized.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Width for a pointer at `x`, floored at the minimum width.
    pub fn width_at(&self, x: i32) -> u32 {
        let delta = i64::from(x) - i64::from(self.start_x);
        let width = (i64::from(self.start_width) + delta).max(i64::from(self.min_width));
        u32::try_from(width).unwrap_or(u32::MAX)
    }

    /// Pointer moved to `x`: issue the new width. Returns the width set.
    pub fn update(&self, engine: &mut TableEngine, x: i32) -> Result<u32> {
        let width = self.width_at(x);
        engine.set_column_sizing([(self.column.clone(), width)])?;
        Ok(width)
    }
}

/// An in-progress column drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDrag {
    column: String,
}

impl ColumnDrag {
    /// Pick up `column_id` for reordering.
    pub fn begin(engine: &TableEngine, column_id: &str) -> Result<Self> {
        let column = engine
            .column(column_id)
            .ok_or_else(|| TableError::UnknownColumn(column_id.to_string()))?;
        if !column.reorderable {
            return Err(TableError::ColumnNotReorderable(column_id.to_string()));
        }
        Ok(Self {
            column: column.id.clone(),
        })
    }

    /// Column being dragged.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Drop onto the header of `target_id`.
    ///
    /// The dragged column is removed and reinserted at the target's index.
    /// Returns whether the order changed; dropping on itself or on an
    /// unknown column does nothing.
    pub fn drop_on(self, engine: &mut TableEngine, target_id: &str) -> Result<bool> {
        if target_id == self.column {
            return Ok(false);
        }

        let mut order = engine.column_order().to_vec();
        let (Some(from), Some(to)) = (
            order.iter().position(|id| *id == self.column),
            order.iter().position(|id| id == target_id),
        ) else {
            debug!(target = target_id, "column dropped outside the header row");
            return Ok(false);
        };

        let moved = order.remove(from);
        order.insert(to, moved);
        engine.set_column_order(order)?;
        Ok(true)
    }
}
