//! Span grid API.
//!
//! - [`SpanGrid`] - Row/column span bookkeeping for a table with merged cells
//! - [`SpanCount`] - The span pair stored per cell
//! - [`SpanBlock`] - The rectangle covered by one anchor cell
//!
//! A cell is drawn only when [`SpanGrid::is_visible`] says so; its draw
//! rectangle is the block returned by [`SpanGrid::block_at`].

mod block;
mod combine;
mod span;
mod spans;

pub use block::SpanBlock;
pub use span::SpanCount;
pub use spans::SpanGrid;
