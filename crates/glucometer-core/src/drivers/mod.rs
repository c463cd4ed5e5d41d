//! Driver registry.
//!
//! A driver is selected by name on the command line and opened against an
//! optional device path (some devices need a port, others autodetect).
//! Hardware wire protocols live in their own modules; a new driver only has
//! to implement [`Meter`](crate::Meter) and get a match arm here.

pub mod mock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::meter::Meter;

/// Names of the registered drivers.
#[must_use]
pub fn available() -> &'static [&'static str] {
    &["mock"]
}

/// Open the named driver against an optional device path.
pub fn open(driver: &str, device: Option<&str>) -> Result<Box<dyn Meter>> {
    debug!(driver, device, "opening driver");
    match driver {
        "mock" => Ok(Box::new(mock::MockMeter::open(device)?)),
        _ => Err(Error::DriverNotFound(driver.to_string())),
    }
}
