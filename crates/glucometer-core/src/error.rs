//! Error types for glucometer-core.
//!
//! Drivers surface everything through [`Error`]; the frontend decides what is
//! fatal. [`Error::NotSupported`] is special-cased by the `info` command,
//! which renders the meter time as `N/A` when a driver cannot read the clock.

use thiserror::Error;

/// Errors that can occur when talking to a meter through a driver.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No driver registered under the requested name.
    #[error("driver '{0}' not found")]
    DriverNotFound(String),

    /// Operation attempted while not connected to the meter.
    #[error("not connected to the meter")]
    NotConnected,

    /// The driver does not implement the requested operation.
    #[error("operation not supported by this meter: {0}")]
    NotSupported(&'static str),

    /// The meter sent data the driver could not make sense of.
    #[error("invalid response from meter: {0}")]
    InvalidResponse(String),

    /// I/O error while talking to the device.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed reading data.
    #[error(transparent)]
    Data(#[from] glucometer_types::Error),
}

impl Error {
    /// Create an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Result type alias using glucometer-core's error type.
pub type Result<T> = std::result::Result<T, Error>;
