//! Mapping span blocks to character-cell rectangles.
//!
//! [`GridLayout`] holds column widths and row heights and turns a visible
//! cell of a [`SpanGrid`] into the rectangle covering its whole block. Both
//! the terminal view and the text export paint through it.

use multispan_grid::{SpanBlock, SpanGrid};

/// A rectangle in character cells, relative to the top-left of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRect {
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    pub fn bottom(&self) -> usize {
        self.y + self.height
    }
}

/// Column and row geometry for a span grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridLayout {
    column_widths: Vec<usize>,
    column_offsets: Vec<usize>,
    row_heights: Vec<usize>,
    row_offsets: Vec<usize>,
    column_gap: usize,
    row_gap: usize,
}

fn offsets(sizes: &[usize], gap: usize) -> Vec<usize> {
    let mut acc = 0;
    sizes
        .iter()
        .map(|size| {
            let start = acc;
            acc += size + gap;
            start
        })
        .collect()
}

impl GridLayout {
    pub fn new(
        column_widths: &[u16],
        row_heights: &[u16],
        column_gap: u16,
        row_gap: u16,
    ) -> Self {
        let column_widths: Vec<usize> = column_widths.iter().map(|&w| w as usize).collect();
        let row_heights: Vec<usize> = row_heights.iter().map(|&h| h as usize).collect();
        let column_gap = column_gap as usize;
        let row_gap = row_gap as usize;
        GridLayout {
            column_offsets: offsets(&column_widths, column_gap),
            row_offsets: offsets(&row_heights, row_gap),
            column_widths,
            row_heights,
            column_gap,
            row_gap,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// Width of all columns including the gaps between them.
    pub fn total_width(&self) -> usize {
        match (self.column_offsets.last(), self.column_widths.last()) {
            (Some(x), Some(w)) => x + w,
            _ => 0,
        }
    }

    /// Height of all rows including the gaps between them.
    pub fn total_height(&self) -> usize {
        match (self.row_offsets.last(), self.row_heights.last()) {
            (Some(y), Some(h)) => y + h,
            _ => 0,
        }
    }

    pub fn row_y(&self, row: usize) -> Option<usize> {
        self.row_offsets.get(row).copied()
    }

    pub fn column_x(&self, col: usize) -> Option<usize> {
        self.column_offsets.get(col).copied()
    }

    /// Row drawn at vertical offset `y`; `None` for gaps and beyond the last row.
    pub fn row_at(&self, y: usize) -> Option<usize> {
        hit(&self.row_offsets, &self.row_heights, y)
    }

    /// Column drawn at horizontal offset `x`; `None` for gaps and beyond the last column.
    pub fn column_at(&self, x: usize) -> Option<usize> {
        hit(&self.column_offsets, &self.column_widths, x)
    }

    /// Rectangle of a block, clipped to the rows and columns this layout knows.
    pub fn block_rect(&self, block: &SpanBlock) -> Option<CellRect> {
        let last_col = block.col_end().min(self.column_count()).checked_sub(1)?;
        let last_row = block.row_end().min(self.row_count()).checked_sub(1)?;
        if last_col < block.col || last_row < block.row {
            return None;
        }
        let x = self.column_offsets[block.col];
        let y = self.row_offsets[block.row];
        Some(CellRect {
            x,
            y,
            width: self.column_offsets[last_col] + self.column_widths[last_col] - x,
            height: self.row_offsets[last_row] + self.row_heights[last_row] - y,
        })
    }

    /// Draw rectangle of `(row, col)`, or `None` when the cell is covered or
    /// out of range.
    pub fn cell_rect(&self, grid: &SpanGrid, row: usize, col: usize) -> Option<CellRect> {
        let block = grid.block_at(row, col)?;
        self.block_rect(&block)
    }

    /// Blocks intersecting rows `first_row..first_row + row_limit`.
    ///
    /// Includes blocks anchored above `first_row` that reach into the window,
    /// so a merged block scrolled partly out of view is still painted.
    pub fn visible_blocks(&self, grid: &SpanGrid, first_row: usize, row_limit: usize) -> Vec<SpanBlock> {
        let end = first_row.saturating_add(row_limit).min(grid.row_count());
        let mut blocks = Vec::new();
        for row in first_row..end {
            for col in 0..grid.column_count() {
                if let Some(block) = grid.block_at(row, col) {
                    blocks.push(block);
                } else if row == first_row
                    && let Some((anchor_row, anchor_col)) = grid.anchor_of(row, col)
                    && anchor_row < first_row
                    && anchor_col == col
                    && let Some(block) = grid.block_at(anchor_row, anchor_col)
                {
                    blocks.push(block);
                }
            }
        }
        blocks
    }
}

fn hit(offsets: &[usize], sizes: &[usize], pos: usize) -> Option<usize> {
    let idx = offsets.partition_point(|&start| start <= pos).checked_sub(1)?;
    (pos < offsets[idx] + sizes[idx]).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::{CellRect, GridLayout};
    use multispan_grid::{SpanBlock, SpanGrid};

    #[test]
    fn test_single_cell_rects() {
        let grid = SpanGrid::new(2, 3);
        let layout = GridLayout::new(&[4, 6, 2], &[1, 2], 1, 0);
        assert_eq!(
            layout.cell_rect(&grid, 1, 1),
            Some(CellRect {
                x: 5,
                y: 1,
                width: 6,
                height: 2
            })
        );
        assert_eq!(layout.total_width(), 14);
        assert_eq!(layout.total_height(), 3);
    }

    #[test]
    fn test_merged_block_rect_includes_gaps() {
        let mut grid = SpanGrid::new(4, 3);
        assert!(grid.combine(&[2, 3], &[0, 1, 2]));
        let layout = GridLayout::new(&[4, 6, 2], &[1, 1, 1, 1], 1, 1);

        let rect = layout.cell_rect(&grid, 2, 0).unwrap();
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 4 + 1 + 6 + 1 + 2);
        assert_eq!(rect.y, 4);
        assert_eq!(rect.height, 3);
        assert_eq!(layout.cell_rect(&grid, 3, 1), None);
    }

    #[test]
    fn test_block_rect_is_clipped_to_layout() {
        let layout = GridLayout::new(&[3, 3], &[1], 0, 0);
        let rect = layout.block_rect(&SpanBlock::new(0, 1, 4, 4)).unwrap();
        assert_eq!(rect.width, 3);
        assert_eq!(rect.height, 1);
        assert_eq!(layout.block_rect(&SpanBlock::new(0, 5, 1, 1)), None);
    }

    #[test]
    fn test_hit_testing() {
        let layout = GridLayout::new(&[4, 6], &[1, 2], 1, 0);
        assert_eq!(layout.column_at(0), Some(0));
        assert_eq!(layout.column_at(3), Some(0));
        assert_eq!(layout.column_at(4), None);
        assert_eq!(layout.column_at(5), Some(1));
        assert_eq!(layout.column_at(11), None);
        assert_eq!(layout.row_at(2), Some(1));
        assert_eq!(layout.row_at(3), None);
    }

    #[test]
    fn test_visible_blocks_include_block_above_window() {
        let mut grid = SpanGrid::new(5, 3);
        assert!(grid.combine(&[1, 2, 3], &[1, 2]));
        let layout = GridLayout::new(&[1, 1, 1], &[1; 5], 0, 0);

        let blocks = layout.visible_blocks(&grid, 2, 2);
        assert!(blocks.contains(&SpanBlock::new(1, 1, 3, 2)));
        assert!(blocks.contains(&SpanBlock::new(2, 0, 1, 1)));
        assert!(blocks.contains(&SpanBlock::new(3, 0, 1, 1)));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_visible_blocks_window_past_end() {
        let grid = SpanGrid::new(2, 2);
        let layout = GridLayout::new(&[1, 1], &[1, 1], 0, 0);
        assert_eq!(layout.visible_blocks(&grid, 1, 10).len(), 2);
        assert!(layout.visible_blocks(&grid, 5, 10).is_empty());
    }
}
