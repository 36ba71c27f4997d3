//! Error types for lincolor
//!
//! The conversion functions themselves are total. Errors only come from the
//! string parsing and buffer-level entry points.

use thiserror::Error;

/// Result type for lincolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lincolor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A hex color string could not be parsed
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Raw byte buffer does not hold whole pixels
    #[error("Invalid pixel layout: {0}")]
    PixelLayout(String),
}
