//! Meter identification data.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Information about a meter, as displayed by the `info` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeterInfo {
    /// Human-readable model name, depending on driver.
    pub model: String,
    /// Serial number identifying the device, `N/A` when the driver cannot
    /// read one.
    pub serial_number: String,
    /// Hardware/software version lines, in the order reported by the device.
    pub version_info: Vec<String>,
    /// Native unit of the device, used as the display default.
    pub native_unit: Unit,
}

impl MeterInfo {
    /// Create meter information with the given model name and the defaults
    /// for everything else (`N/A` serial, no version lines, mg/dL).
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            serial_number: "N/A".to_string(),
            version_info: Vec::new(),
            native_unit: Unit::MgDl,
        }
    }

    /// Set the serial number.
    #[must_use]
    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    /// Set the version information lines.
    #[must_use]
    pub fn with_version_info<I, S>(mut self, version_info: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.version_info = version_info.into_iter().map(Into::into).collect();
        self
    }

    /// Set the native unit.
    #[must_use]
    pub fn with_native_unit(mut self, native_unit: Unit) -> Self {
        self.native_unit = native_unit;
        self
    }
}

impl fmt::Display for MeterInfo {
    /// Multi-line rendering: model, serial number, indented version lines
    /// (or `N/A`), native unit label. Ends with a newline so a caller can
    /// append further lines directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_info = if self.version_info.is_empty() {
            "N/A".to_string()
        } else {
            self.version_info.join("\n    ").trim().to_string()
        };

        writeln!(f, "{}", self.model)?;
        writeln!(f, "Serial Number: {}", self.serial_number)?;
        writeln!(f, "Version Information:")?;
        writeln!(f, "    {version_info}")?;
        writeln!(f, "Native Unit: {}", self.native_unit.label())
    }
}
