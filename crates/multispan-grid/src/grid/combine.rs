//! Combining cells into blocks and splitting them again.

use super::{SpanCount, SpanGrid};
use tracing::debug;

impl SpanGrid {
    /// Merge the rows and columns given by index into one block.
    ///
    /// Only the first index and the count of each list are used: the block
    /// starts at `(rows[0], cols[0])` and covers `rows.len()` x `cols.len()`
    /// cells. Every index and the resulting rectangle must be in bounds and
    /// every target cell must be un-combined; otherwise nothing changes.
    ///
    /// Returns whether the merge was applied. A rejected merge is not an error.
    pub fn combine(&mut self, rows: &[usize], cols: &[usize]) -> bool {
        let (Some(&start_row), Some(&start_col)) = (rows.first(), cols.first()) else {
            debug!("combine ignored: empty index list");
            return false;
        };
        if rows.iter().any(|&row| row >= self.row_count())
            || cols.iter().any(|&col| col >= self.column_count())
        {
            debug!(?rows, ?cols, "combine ignored: index out of range");
            return false;
        }
        self.combine_area(start_row, start_col, rows.len(), cols.len())
    }

    /// Merge the `rows` x `cols` rectangle whose top-left cell is `(row, col)`.
    ///
    /// Same rules as [`SpanGrid::combine`].
    pub fn combine_area(&mut self, row: usize, col: usize, rows: usize, cols: usize) -> bool {
        if rows == 0 || cols == 0 {
            debug!(row, col, rows, cols, "combine ignored: empty area");
            return false;
        }
        let (Some(row_end), Some(col_end)) = (row.checked_add(rows), col.checked_add(cols)) else {
            debug!(row, col, rows, cols, "combine ignored: area overflows");
            return false;
        };
        if row_end > self.row_count() || col_end > self.column_count() {
            debug!(row, col, rows, cols, "combine ignored: area out of range");
            return false;
        }
        let (Ok(height), Ok(width)) = (i32::try_from(rows), i32::try_from(cols)) else {
            debug!(rows, cols, "combine ignored: area too large");
            return false;
        };
        if !self.is_free_area(row, col, row_end, col_end) {
            debug!(row, col, rows, cols, "combine ignored: area overlaps a merged block");
            return false;
        }

        let mut row_number = 0;
        for cell_row in row..row_end {
            let mut column_number = 0;
            for cell_col in col..col_end {
                self.set(cell_row, cell_col, SpanCount::new(row_number, column_number));
                column_number -= 1;
            }
            row_number -= 1;
        }
        self.set(row, col, SpanCount::new(height, width));
        true
    }

    /// Undo the merge anchored at `(row, col)`.
    ///
    /// Every cell of the block becomes un-combined again. Returns `false` when
    /// `(row, col)` is not the anchor of a block larger than one cell.
    pub fn split(&mut self, row: usize, col: usize) -> bool {
        let Some(block) = self.block_at(row, col).filter(|b| b.is_merged()) else {
            return false;
        };
        let row_end = block.row_end().min(self.row_count());
        let col_end = block.col_end().min(self.column_count());
        for cell_row in block.row..row_end {
            for cell_col in block.col..col_end {
                self.set(cell_row, cell_col, SpanCount::SINGLE);
            }
        }
        true
    }

    /// Whether every cell in `[row, row_end) x [col, col_end)` is un-combined.
    fn is_free_area(&self, row: usize, col: usize, row_end: usize, col_end: usize) -> bool {
        (row..row_end).all(|r| (col..col_end).all(|c| self.span(r, c).is_single()))
    }
}
