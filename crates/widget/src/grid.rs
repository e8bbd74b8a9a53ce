//! Fixed-grid placement for menu actions.
//!
//! Actions fill a column top to bottom; when a column is full the cursor
//! moves one column to the right and starts over at the top row. There is
//! no wrapping and no dynamic sizing; a [`Grid`] holds at most
//! [`capacity`](Grid::capacity) entries and refuses larger sets up front,
//! before placing anything.

use skein_ui_core::Point;
use thiserror::Error;

/// The action set does not fit in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("menu capacity exceeded: {attempted} actions do not fit in a grid of {limit}")]
pub struct CapacityExceeded {
    /// How many slots the grid has.
    pub limit: usize,
    /// How many actions were submitted.
    pub attempted: usize,
}

/// The row/column arrangement of a menu's action labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Rows per column.
    pub max_rows: usize,
    /// Number of columns.
    pub max_cols: usize,
    /// Vertical distance between rows.
    pub row_spacing: f32,
    /// Horizontal distance between columns.
    pub col_spacing: f32,
    /// Inset of the first slot from the grid origin, applied on both axes.
    pub padding: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            max_rows: 4,
            max_cols: 3,
            row_spacing: 40.0,
            col_spacing: 200.0,
            padding: 40.0,
        }
    }
}

impl Grid {
    /// The number of slots the grid can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_rows * self.max_cols
    }

    /// Places `count` slots relative to `origin`, in layout order.
    ///
    /// Slot `i` lands at `(padding + origin.x + col * col_spacing,
    /// padding + origin.y + row * row_spacing)`. Fails with
    /// [`CapacityExceeded`] before placing anything when `count` exceeds
    /// [`capacity`](Grid::capacity).
    pub fn arrange(&self, count: usize, origin: Point) -> Result<Vec<Point>, CapacityExceeded> {
        if count > self.capacity() {
            return Err(CapacityExceeded {
                limit: self.capacity(),
                attempted: count,
            });
        }

        let mut slots = Vec::with_capacity(count);
        let mut rows = 0;
        let mut col_x = self.padding + origin.x;
        let mut row_y = self.padding + origin.y;

        for _ in 0..count {
            if rows == self.max_rows {
                rows = 0;
                row_y = self.padding + origin.y;
                col_x += self.col_spacing;
            }

            slots.push(Point::new(col_x, row_y));

            row_y += self.row_spacing;
            rows += 1;
        }

        Ok(slots)
    }
}
