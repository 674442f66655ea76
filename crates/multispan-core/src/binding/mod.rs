//! Binding of an article list onto a span grid (UI-agnostic).
//!
//! Every article occupies two grid rows: a summary row with one cell per
//! [`Column`](crate::Column), followed by a detail row whose cells from the
//! detail start column onwards are combined into a single block.

mod cells;
mod ops;
mod state;

pub use state::{
    BindingOptions, FetchLookup, GridBinding, GridChange, ROWS_PER_RECORD, RowKind,
};
