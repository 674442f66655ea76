//! Per-cell span counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row and column span numbers stored for one grid cell.
///
/// An anchor cell (both numbers `>= 1`) holds the height and width of the
/// block it starts. A covered cell has at least one number `<= 0`; only the
/// sign matters to callers.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpanCount {
    pub row_span: i32,
    pub column_span: i32,
}

impl SpanCount {
    /// Value of a cell that is not part of any merge.
    pub const SINGLE: SpanCount = SpanCount {
        row_span: 1,
        column_span: 1,
    };

    /// Returned for queries outside the grid.
    pub const INVALID: SpanCount = SpanCount {
        row_span: 0,
        column_span: 0,
    };

    pub fn new(row_span: i32, column_span: i32) -> SpanCount {
        SpanCount {
            row_span,
            column_span,
        }
    }

    /// Whether this cell starts a block and is drawn on its own.
    pub fn is_anchor(&self) -> bool {
        self.row_span >= 1 && self.column_span >= 1
    }

    /// Whether this cell is hidden behind an anchor to its upper left.
    pub fn is_covered(&self) -> bool {
        !self.is_anchor()
    }

    /// Whether this cell is an un-combined 1x1 cell.
    pub fn is_single(&self) -> bool {
        *self == Self::SINGLE
    }
}

impl Default for SpanCount {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl fmt::Display for SpanCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row_span, self.column_span)
    }
}
