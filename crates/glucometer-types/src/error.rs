//! Error types for the glucometer data model.

use thiserror::Error;

/// Errors raised by the data model.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A label that does not name a known measurement unit.
    #[error("invalid unit: {0}")]
    InvalidUnit(String),
}

/// Result type alias using glucometer-types' error type.
pub type Result<T> = std::result::Result<T, Error>;
