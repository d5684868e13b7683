//! Common error types for page-envelope
//!
//! The pagination path itself never fails: degenerate inputs (missing fields,
//! zero page sizes) degrade silently to `None` rather than raising errors.
//! Only configuration loading can surface an error.

use thiserror::Error;

/// Common result type for page-envelope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for configuration handling
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
