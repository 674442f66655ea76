//! Error types for the multispan viewer

use multispan_core::MultispanError;
use thiserror::Error;

/// Errors that can occur in the multispan viewer
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] MultispanError),
}

pub type Result<T> = std::result::Result<T, AppError>;
