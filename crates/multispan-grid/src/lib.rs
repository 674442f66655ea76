//! multispan_grid - Span bookkeeping for tables with merged cells.

pub mod grid;

pub use grid::{SpanBlock, SpanCount, SpanGrid};
