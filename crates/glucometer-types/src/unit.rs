//! Glucose measurement units and conversion between them.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Unit a blood glucose value is expressed in.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new units in future
/// versions without breaking downstream code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Unit {
    /// Milligrams per decilitre. Most LifeScan meters report raw data in this
    /// unit, so it doubles as the canonical storage unit for glucose readings.
    #[default]
    MgDl,
    /// Millimoles per litre.
    MmolL,
}

impl Unit {
    /// Human-readable unit label, as printed next to exported values.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Unit::MgDl => "mg/dL",
            Unit::MmolL => "mmol/L",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Parse a unit from its label, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use glucometer_types::Unit;
    ///
    /// assert_eq!("mg/dL".parse::<Unit>().unwrap(), Unit::MgDl);
    /// assert_eq!("MMOL/L".parse::<Unit>().unwrap(), Unit::MmolL);
    /// assert!("furlongs".parse::<Unit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mg/dl" => Ok(Unit::MgDl),
            "mmol/l" => Ok(Unit::MmolL),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

/// Scale factor between mg/dL and mmol/L for glucose (molar mass of glucose,
/// 180 g/mol, over the dL-to-L volume ratio).
const MG_DL_PER_MMOL_L: f64 = 18.0;

/// Convert a glucose value between units.
///
/// Returns the value unchanged when the units match. Conversion to mmol/L is
/// rounded to two decimals, conversion to mg/dL to an integer, matching the
/// precision the meters themselves display.
///
/// # Examples
///
/// ```
/// use glucometer_types::{Unit, convert_glucose_unit};
///
/// assert_eq!(convert_glucose_unit(100.0, Unit::MgDl, Unit::MmolL), 5.56);
/// assert_eq!(convert_glucose_unit(5.56, Unit::MmolL, Unit::MgDl), 100.0);
/// assert_eq!(convert_glucose_unit(100.0, Unit::MgDl, Unit::MgDl), 100.0);
/// ```
#[must_use]
pub fn convert_glucose_unit(value: f64, from_unit: Unit, to_unit: Unit) -> f64 {
    if from_unit == to_unit {
        return value;
    }

    match from_unit {
        Unit::MgDl => round_to(value / MG_DL_PER_MMOL_L, 2),
        Unit::MmolL => (value * MG_DL_PER_MMOL_L).round(),
    }
}

/// Round to a fixed number of decimal digits.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
