//! Trait abstraction for meter drivers.
//!
//! This is the contract the CLI consumes: a driver wraps one device behind a
//! [`Meter`] and the frontend never sees the wire protocol. Operations a
//! device family cannot perform keep their default implementation, which
//! fails with [`Error::NotSupported`].

use time::PrimitiveDateTime;

use glucometer_types::{MeterInfo, Reading};

use crate::error::{Error, Result};

/// A glucometer device opened through a driver.
///
/// The connection is a scoped resource: [`connect`](Meter::connect) must be
/// called before any other operation, and [`disconnect`](Meter::disconnect)
/// closes it on the normal exit path. The tool is single-shot, so drivers do
/// not need to survive reconnection.
pub trait Meter {
    /// Description of the driver, including supported features and known
    /// quirks. Shown by the `help` command.
    fn description(&self) -> &'static str;

    /// Open the connection to the meter.
    fn connect(&mut self) -> Result<()>;

    /// Close the connection to the meter.
    fn disconnect(&mut self) -> Result<()>;

    /// Read the meter's identification data.
    fn meter_info(&mut self) -> Result<MeterInfo>;

    /// Read the meter's clock.
    fn get_datetime(&mut self) -> Result<PrimitiveDateTime> {
        Err(Error::NotSupported("get_datetime"))
    }

    /// Set the meter's clock; `None` means the current wall-clock time.
    ///
    /// Returns the time actually stored on the device, which may be coarser
    /// than the requested one (many meters keep no seconds).
    fn set_datetime(&mut self, datetime: Option<PrimitiveDateTime>) -> Result<PrimitiveDateTime> {
        let _ = datetime;
        Err(Error::NotSupported("set_datetime"))
    }

    /// Retrieve every reading stored in the meter's data log.
    fn get_readings(&mut self) -> Result<Vec<Reading>>;

    /// Erase the meter's data log.
    fn zero_log(&mut self) -> Result<()> {
        Err(Error::NotSupported("zero_log"))
    }
}
