//! Driver layer for glucometer devices.
//!
//! This crate defines the contract between the CLI and device drivers:
//!
//! - the [`Meter`] trait every driver implements,
//! - the [`drivers`] registry resolving a `--driver` name to an open driver,
//! - the [`Error`] taxonomy the frontend reports from,
//! - a [`MockMeter`] driver usable without hardware.
//!
//! Everything is synchronous: the tool talks to one device at a time, from a
//! single thread, in a single shot.
//!
//! # Example
//!
//! ```
//! use glucometer_core::{Meter, drivers};
//!
//! let mut meter = drivers::open("mock", None)?;
//! meter.connect()?;
//! let info = meter.meter_info()?;
//! println!("{info}");
//! meter.disconnect()?;
//! # Ok::<(), glucometer_core::Error>(())
//! ```

pub mod clock;
pub mod drivers;
pub mod error;
pub mod meter;

pub use drivers::mock::{MockMeter, MockMeterBuilder};
pub use error::{Error, Result};
pub use meter::Meter;
