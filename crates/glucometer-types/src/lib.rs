//! Data model for home glucometer readings.
//!
//! This crate provides the shared types every driver and frontend works with:
//! measurement units and their conversion, immutable glucose/ketone reading
//! records with CSV and Libre-TSV serialization, and meter identification
//! data.
//!
//! # Example
//!
//! ```
//! use glucometer_types::{GlucoseReading, Unit};
//! use time::macros::datetime;
//!
//! let reading = GlucoseReading::new(datetime!(2018-01-01 08:15:00), 100.0);
//! assert_eq!(reading.value_as(Unit::MmolL), 5.56);
//! ```

pub mod error;
pub mod meter;
pub mod reading;
pub mod unit;

pub use error::{Error, Result};
pub use meter::MeterInfo;
pub use reading::{GlucoseReading, KetoneReading, LibreRecordType, Meal, MeasureMethod, Reading};
pub use unit::{Unit, convert_glucose_unit};
