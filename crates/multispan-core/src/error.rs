//! Error types for multispan core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or binding articles
#[derive(Error, Debug)]
pub enum MultispanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Record index {index} out of range ({len} records)")]
    RecordIndex { index: usize, len: usize },

    #[error("Refusing to read {}: file too large ({size} bytes, max {max})", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, MultispanError>;
