use serde::{Deserialize, Serialize};

/// The rectangle covered by one anchor cell.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpanBlock {
    /// Anchor row (0-indexed).
    pub row: usize,
    /// Anchor column (0-indexed).
    pub col: usize,
    /// Number of rows in the block.
    pub rows: usize,
    /// Number of columns in the block.
    pub cols: usize,
}

impl SpanBlock {
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> SpanBlock {
        SpanBlock {
            row,
            col,
            rows,
            cols,
        }
    }

    /// One past the last row of the block.
    pub fn row_end(&self) -> usize {
        self.row + self.rows
    }

    /// One past the last column of the block.
    pub fn col_end(&self) -> usize {
        self.col + self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row_end() && col >= self.col && col < self.col_end()
    }

    pub fn is_merged(&self) -> bool {
        self.rows > 1 || self.cols > 1
    }
}

#[cfg(test)]
mod tests {
    use super::SpanBlock;

    #[test]
    fn test_contains() {
        let block = SpanBlock::new(2, 0, 2, 3);
        assert!(block.contains(2, 0));
        assert!(block.contains(3, 2));
        assert!(!block.contains(4, 0));
        assert!(!block.contains(2, 3));
        assert!(!block.contains(1, 1));
    }

    #[test]
    fn test_is_merged() {
        assert!(!SpanBlock::new(0, 0, 1, 1).is_merged());
        assert!(SpanBlock::new(0, 0, 1, 4).is_merged());
    }
}
