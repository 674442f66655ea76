//! multispan-core - UI-agnostic article table model + storage.

pub mod binding;
pub mod columns;
pub mod error;
pub mod layout;
pub mod record;
pub mod storage;

pub use binding::{BindingOptions, FetchLookup, GridBinding, GridChange, RowKind};
pub use columns::Column;
pub use error::{MultispanError, Result};
pub use layout::{CellRect, GridLayout};
pub use record::{Article, Author};

pub use multispan_grid::{SpanBlock, SpanCount, SpanGrid};
