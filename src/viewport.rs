//! Viewport management
//!
//! Tracks which rows of the hex dump are visible and scrolls to keep the
//! cursor's row on screen. Purely a rendering concern — it never touches
//! the edit buffer.

/// The visible window into the hex dump, measured in rows (each row is
/// [`crate::constants::BYTES_PER_ROW`] bytes) rather than text lines.
pub struct Viewport {
    /// Index of the first visible row.
    top_row: usize,
    /// Number of rows that fit in the terminal, reserving space for the
    /// header and status bar.
    visible_rows: usize,
    /// Terminal width in columns, used to clamp cursor display position.
    visible_cols: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport {
            top_row: 0,
            visible_rows: rows,
            visible_cols: cols,
        }
    }

    /// Scroll so that `cursor_row` is within `[top_row, top_row + visible_rows)`,
    /// clamped so the window never runs past `total_rows`.
    pub fn scroll_to(&mut self, cursor_row: usize, total_rows: usize) {
        if cursor_row < self.top_row {
            self.top_row = cursor_row;
        }
        let bottom_row = self.top_row + self.visible_rows.saturating_sub(1);
        if cursor_row > bottom_row {
            self.top_row = cursor_row.saturating_sub(self.visible_rows.saturating_sub(1));
        }
        if self.top_row > total_rows {
            self.top_row = total_rows.saturating_sub(1);
        }
    }

    #[must_use]
    pub fn top_row(&self) -> usize {
        self.top_row
    }

    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    #[must_use]
    pub fn visible_cols(&self) -> usize {
        self.visible_cols
    }

    pub fn set_size(&mut self, rows: usize, cols: usize) {
        self.visible_rows = rows;
        self.visible_cols = cols;
    }
}
