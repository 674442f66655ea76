//! Span grid storage, queries and resizing.

use super::{SpanBlock, SpanCount};
use tracing::{debug, trace};

/// Span bookkeeping for a `row_count` x `column_count` table.
///
/// Cells are stored row-major in one contiguous vector. Every query is
/// bounds-checked: out-of-range reads return [`SpanCount::INVALID`] or
/// `false`/`None`, and out-of-range mutations leave the grid untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanGrid {
    row_count: usize,
    column_count: usize,
    cells: Vec<SpanCount>,
}

/// Cell count of a `rows` x `columns` grid, or `None` when it cannot be allocated.
fn cell_count(rows: usize, columns: usize) -> Option<usize> {
    let len = rows.checked_mul(columns)?;
    let bytes = len.checked_mul(std::mem::size_of::<SpanCount>())?;
    (bytes <= isize::MAX as usize).then_some(len)
}

impl SpanGrid {
    /// Create a grid with every cell un-combined.
    ///
    /// A size too large to allocate yields an empty grid.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        let mut grid = SpanGrid::default();
        grid.set_size(column_count, row_count);
        grid
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// True when the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.row_count && col < self.column_count).then(|| row * self.column_count + col)
    }

    /// Overwrite a cell. Callers have already validated the position.
    pub(crate) fn set(&mut self, row: usize, col: usize, span: SpanCount) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = span;
        }
    }

    /// Stored span for an in-bounds cell.
    pub fn get(&self, row: usize, col: usize) -> Option<SpanCount> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Stored span, or [`SpanCount::INVALID`] when `(row, col)` is outside the grid.
    pub fn span(&self, row: usize, col: usize) -> SpanCount {
        self.get(row, col).unwrap_or(SpanCount::INVALID)
    }

    /// Whether the cell is in bounds and is the anchor of its block.
    pub fn is_visible(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|span| span.is_anchor())
    }

    /// Reallocate to `columns` x `rows`, discarding every merge.
    ///
    /// A size too large to allocate leaves the grid unchanged.
    pub fn set_size(&mut self, columns: usize, rows: usize) {
        let Some(len) = cell_count(rows, columns) else {
            debug!(rows, columns, "set_size ignored: cell count overflows");
            return;
        };
        trace!(rows, columns, "span grid reset");
        self.row_count = rows;
        self.column_count = columns;
        self.cells = vec![SpanCount::SINGLE; len];
    }

    /// Append one un-combined row.
    pub fn add_row(&mut self) {
        let Some((rows, len)) = self
            .row_count
            .checked_add(1)
            .and_then(|rows| Some((rows, cell_count(rows, self.column_count)?)))
        else {
            debug!(rows = self.row_count, "add_row ignored: cell count overflows");
            return;
        };
        self.cells.resize(len, SpanCount::SINGLE);
        self.row_count = rows;
        trace!(rows = self.row_count, "span grid row added");
    }

    /// Append one un-combined column.
    pub fn add_column(&mut self) {
        let old_columns = self.column_count;
        let Some(len) = old_columns
            .checked_add(1)
            .and_then(|columns| cell_count(self.row_count, columns))
        else {
            debug!(columns = old_columns, "add_column ignored: cell count overflows");
            return;
        };
        let mut cells = Vec::with_capacity(len);
        for row in 0..self.row_count {
            let start = row * old_columns;
            cells.extend_from_slice(&self.cells[start..start + old_columns]);
            cells.push(SpanCount::SINGLE);
        }
        self.cells = cells;
        self.column_count = old_columns + 1;
        trace!(columns = self.column_count, "span grid column added");
    }

    /// Insert an un-combined row at `at`, shifting later rows down.
    ///
    /// Spans are moved, not adjusted: inserting inside a merged block leaves
    /// the block's anchor claiming rows it no longer covers. Only insert at
    /// block boundaries.
    pub fn insert_row(&mut self, at: usize) {
        if at > self.row_count {
            debug!(at, rows = self.row_count, "insert_row ignored: index out of range");
            return;
        }
        let grown = self.row_count.checked_add(1);
        if grown.and_then(|rows| cell_count(rows, self.column_count)).is_none() {
            debug!(at, rows = self.row_count, "insert_row ignored: cell count overflows");
            return;
        }
        let start = at * self.column_count;
        self.cells.splice(
            start..start,
            std::iter::repeat_n(SpanCount::SINGLE, self.column_count),
        );
        self.row_count += 1;
        trace!(at, rows = self.row_count, "span grid row inserted");
    }

    /// Block anchored at `(row, col)`, if that cell is an anchor.
    pub fn block_at(&self, row: usize, col: usize) -> Option<SpanBlock> {
        let span = self.get(row, col)?;
        if !span.is_anchor() {
            return None;
        }
        let rows = usize::try_from(span.row_span).ok()?;
        let cols = usize::try_from(span.column_span).ok()?;
        Some(SpanBlock::new(row, col, rows, cols))
    }

    /// Anchor position of the block containing `(row, col)`.
    ///
    /// Returns `None` for out-of-range cells and for covered cells whose
    /// anchor can no longer be found (e.g. after a row was inserted inside
    /// the block).
    pub fn anchor_of(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let span = self.get(row, col)?;
        if !span.is_covered() {
            return Some((row, col));
        }
        // Covered cells carry their negated offset from the anchor.
        let row_offset = usize::try_from(-i64::from(span.row_span)).ok()?;
        let col_offset = usize::try_from(-i64::from(span.column_span)).ok()?;
        let anchor_row = row.checked_sub(row_offset)?;
        let anchor_col = col.checked_sub(col_offset)?;
        let block = self.block_at(anchor_row, anchor_col)?;
        block
            .contains(row, col)
            .then_some((anchor_row, anchor_col))
    }

    /// All blocks in row-major order of their anchors.
    pub fn blocks(&self) -> impl Iterator<Item = SpanBlock> + '_ {
        (0..self.row_count)
            .flat_map(move |row| (0..self.column_count).filter_map(move |col| self.block_at(row, col)))
    }

    /// Check that every cell belongs to exactly one in-bounds block.
    ///
    /// Diagnostic only; the grid never repairs itself.
    pub fn is_consistent(&self) -> bool {
        let mut owned = vec![false; self.cells.len()];
        for block in self.blocks() {
            if block.row_end() > self.row_count || block.col_end() > self.column_count {
                return false;
            }
            for row in block.row..block.row_end() {
                for col in block.col..block.col_end() {
                    let idx = row * self.column_count + col;
                    if owned[idx] {
                        return false;
                    }
                    owned[idx] = true;
                }
            }
        }
        owned.iter().all(|&o| o)
    }
}

#[cfg(test)]
mod tests {
    use super::SpanGrid;
    use crate::grid::{SpanBlock, SpanCount};

    #[test]
    fn test_new_grid_is_all_single() {
        let grid = SpanGrid::new(3, 4);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 4);
        for row in 0..3 {
            for col in 0..4 {
                assert!(grid.is_visible(row, col));
                assert_eq!(grid.span(row, col), SpanCount::SINGLE);
            }
        }
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let grid = SpanGrid::new(2, 2);
        assert!(!grid.is_visible(2, 0));
        assert!(!grid.is_visible(0, 2));
        assert!(!grid.is_visible(usize::MAX, usize::MAX));
        assert_eq!(grid.span(5, 5), SpanCount::INVALID);
        assert_eq!(grid.get(2, 1), None);
        assert_eq!(grid.anchor_of(9, 0), None);
        assert_eq!(grid.block_at(0, 9), None);
    }

    #[test]
    fn test_empty_grid() {
        let grid = SpanGrid::new(0, 0);
        assert!(grid.is_empty());
        assert!(!grid.is_visible(0, 0));
        assert_eq!(grid.blocks().count(), 0);
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_add_row_preserves_existing_spans() {
        let mut grid = SpanGrid::new(2, 3);
        assert!(grid.combine(&[0, 1], &[1, 2]));
        let before = grid.clone();

        grid.add_row();
        assert_eq!(grid.row_count(), 3);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(grid.span(row, col), before.span(row, col));
            }
        }
        for col in 0..3 {
            assert_eq!(grid.span(2, col), SpanCount::SINGLE);
        }
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_add_row_on_empty_grid() {
        let mut grid = SpanGrid::new(0, 2);
        grid.add_row();
        assert_eq!(grid.row_count(), 1);
        assert!(grid.is_visible(0, 1));

        let mut no_columns = SpanGrid::default();
        no_columns.add_row();
        assert_eq!(no_columns.row_count(), 1);
        assert!(no_columns.is_empty());
    }

    #[test]
    fn test_add_column_preserves_existing_spans() {
        let mut grid = SpanGrid::new(3, 2);
        assert!(grid.combine(&[1, 2], &[0, 1]));

        grid.add_column();
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.span(1, 0), SpanCount::new(2, 2));
        assert!(!grid.is_visible(2, 1));
        for row in 0..3 {
            assert_eq!(grid.span(row, 2), SpanCount::SINGLE);
        }
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_add_column_on_grid_without_rows() {
        let mut grid = SpanGrid::new(0, 0);
        grid.add_column();
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_set_size_resets_all_spans() {
        let mut grid = SpanGrid::new(4, 3);
        assert!(grid.combine(&[2, 3], &[0, 1, 2]));

        grid.set_size(5, 2);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 5);
        for row in 0..2 {
            for col in 0..5 {
                assert_eq!(grid.span(row, col), SpanCount::SINGLE);
            }
        }
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let huge = usize::MAX / 2 + 1;
        let mut grid = SpanGrid::new(2, 2);
        assert!(grid.combine(&[0, 1], &[0, 1]));
        let before = grid.clone();

        grid.set_size(2, huge);
        assert_eq!(grid, before);
        assert!(grid.is_visible(0, 0));
        assert!(!grid.is_visible(1, 1));

        let grid = SpanGrid::new(huge, 2);
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 0);
        assert!(!grid.is_visible(0, 0));
    }

    #[test]
    fn test_growth_past_cell_limit_is_noop() {
        let mut grid = SpanGrid::new(usize::MAX, 0);
        assert_eq!(grid.row_count(), usize::MAX);
        grid.add_row();
        grid.insert_row(0);
        assert_eq!(grid.row_count(), usize::MAX);
        grid.add_column();
        assert_eq!(grid.column_count(), 0);
        assert!(!grid.is_visible(0, 0));
    }

    #[test]
    fn test_insert_row_shifts_rows_down() {
        let mut grid = SpanGrid::new(3, 2);
        assert!(grid.combine(&[1], &[0, 1]));

        grid.insert_row(1);
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.span(1, 0), SpanCount::SINGLE);
        assert_eq!(grid.span(1, 1), SpanCount::SINGLE);
        assert_eq!(grid.span(2, 0), SpanCount::new(1, 2));
        assert!(!grid.is_visible(2, 1));
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_insert_row_at_end_appends() {
        let mut grid = SpanGrid::new(2, 2);
        grid.insert_row(2);
        assert_eq!(grid.row_count(), 3);
        assert!(grid.is_visible(2, 0));
    }

    #[test]
    fn test_insert_row_out_of_range_is_noop() {
        let mut grid = SpanGrid::new(2, 2);
        let before = grid.clone();
        grid.insert_row(3);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_insert_row_inside_block_is_not_span_aware() {
        let mut grid = SpanGrid::new(3, 2);
        assert!(grid.combine(&[0, 1, 2], &[0, 1]));

        grid.insert_row(1);
        // The anchor still claims three rows, but a fresh row now sits inside.
        assert_eq!(grid.span(0, 0), SpanCount::new(3, 2));
        assert_eq!(grid.span(1, 0), SpanCount::SINGLE);
        assert!(!grid.is_consistent());
        assert_eq!(grid.anchor_of(3, 1), None);
    }

    #[test]
    fn test_anchor_of_covered_cells() {
        let mut grid = SpanGrid::new(4, 3);
        assert!(grid.combine(&[2, 3], &[0, 1, 2]));
        assert_eq!(grid.anchor_of(2, 0), Some((2, 0)));
        assert_eq!(grid.anchor_of(2, 2), Some((2, 0)));
        assert_eq!(grid.anchor_of(3, 1), Some((2, 0)));
        assert_eq!(grid.anchor_of(0, 1), Some((0, 1)));
    }

    #[test]
    fn test_blocks_row_major() {
        let mut grid = SpanGrid::new(2, 3);
        assert!(grid.combine(&[0], &[1, 2]));
        let blocks: Vec<SpanBlock> = grid.blocks().collect();
        assert_eq!(
            blocks,
            vec![
                SpanBlock::new(0, 0, 1, 1),
                SpanBlock::new(0, 1, 1, 2),
                SpanBlock::new(1, 0, 1, 1),
                SpanBlock::new(1, 1, 1, 1),
                SpanBlock::new(1, 2, 1, 1),
            ]
        );
    }
}
