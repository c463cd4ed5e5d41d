//! Reading record types and their CSV/TSV export formats.
//!
//! Readings are produced by drivers while parsing a meter's data log and are
//! immutable from then on: fields are private, construction goes through
//! [`GlucoseReading::new`] / [`KetoneReading::new`] and the consuming `with_*`
//! methods, and only accessors are exposed.

use core::fmt;

use time::PrimitiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::unit::{Unit, convert_glucose_unit};

/// Meal-relativeness of a glucose reading, as reported by the meter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum Meal {
    /// No meal information recorded.
    #[default]
    None,
    /// Taken before a meal.
    Before,
    /// Taken after a meal.
    After,
}

impl Meal {
    /// Label used in CSV output. The empty string means no meal information.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Meal::None => "",
            Meal::Before => "Before Meal",
            Meal::After => "After Meal",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a reading was measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum MeasureMethod {
    /// Discrete blood-sample strip test.
    #[default]
    BloodSample,
    /// Continuous Glucose Monitoring sensor.
    Cgm,
}

impl MeasureMethod {
    /// Label used in CSV output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MeasureMethod::BloodSample => "blood sample",
            MeasureMethod::Cgm => "CGM",
        }
    }
}

impl fmt::Display for MeasureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Record-type code of the Libre spreadsheet import template.
///
/// The code selects which value column of a TSV row is populated; a row with
/// an unrecognized code carries no value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibreRecordType {
    /// Automatic CGM sensor reading (comment prefix `(Sensor)`).
    Historic,
    /// On-demand CGM scan (comment prefix `(Scan)`).
    Scan,
    /// Blood-sample strip reading (comment prefix `(Blood)`).
    Strip,
    /// Blood ketone reading.
    Ketone,
    /// Reading matching none of the known comment conventions.
    Unrecognized,
}

/// Comment-prefix conventions used by the supported drivers to tag readings.
///
/// This is a compatibility shim for the Libre import template: the prefixes
/// are hard-coded strings written independently by each driver, kept in one
/// table so the coupling is at least visible in one place.
const LIBRE_RECORD_TABLE: &[(MeasureMethod, &str, LibreRecordType)] = &[
    (MeasureMethod::Cgm, "(Sensor)", LibreRecordType::Historic),
    (MeasureMethod::Cgm, "(Scan)", LibreRecordType::Scan),
    (MeasureMethod::BloodSample, "(Blood)", LibreRecordType::Strip),
];

impl LibreRecordType {
    /// Classify a glucose reading by measure method and comment prefix.
    #[must_use]
    pub fn of_glucose(method: MeasureMethod, comment: &str) -> Self {
        LIBRE_RECORD_TABLE
            .iter()
            .find(|(m, prefix, _)| *m == method && comment.starts_with(prefix))
            .map_or(LibreRecordType::Unrecognized, |(_, _, record_type)| {
                *record_type
            })
    }

    /// Numeric code emitted in the `Record Type` column.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LibreRecordType::Historic => "0",
            LibreRecordType::Scan => "1",
            LibreRecordType::Strip => "2",
            LibreRecordType::Ketone => "3",
            LibreRecordType::Unrecognized => "-1",
        }
    }

    /// Index of the value column this record type populates, if any.
    fn value_column(&self) -> Option<usize> {
        match self {
            LibreRecordType::Historic => Some(COL_HISTORIC_GLUCOSE),
            LibreRecordType::Scan => Some(COL_SCAN_GLUCOSE),
            LibreRecordType::Strip => Some(COL_STRIP_GLUCOSE),
            LibreRecordType::Ketone => Some(COL_KETONE),
            LibreRecordType::Unrecognized => None,
        }
    }
}

// Column indices within a TSV reading row (the numbering ID column written by
// the exporter is not part of the row).
const COL_TIME: usize = 0;
const COL_RECORD_TYPE: usize = 1;
const COL_HISTORIC_GLUCOSE: usize = 2;
const COL_SCAN_GLUCOSE: usize = 3;
const COL_STRIP_GLUCOSE: usize = 11;
const COL_KETONE: usize = 12;

/// Total columns in a TSV reading row: 18 data columns plus the empty
/// trailing column the import template expects.
const TSV_COLUMNS: usize = 19;

/// A timestamped glucose measurement.
///
/// The value is always stored in mg/dL regardless of the unit the source
/// device uses, and converted on output only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlucoseReading {
    #[cfg_attr(feature = "serde", serde(with = "timestamp_format"))]
    timestamp: PrimitiveDateTime,
    value: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    meal: Meal,
    #[cfg_attr(feature = "serde", serde(default))]
    comment: String,
    #[cfg_attr(feature = "serde", serde(default))]
    measure_method: MeasureMethod,
}

impl GlucoseReading {
    /// Create a reading with the given timestamp and value in mg/dL.
    ///
    /// Meal defaults to [`Meal::None`], the comment to empty, and the measure
    /// method to [`MeasureMethod::BloodSample`].
    #[must_use]
    pub fn new(timestamp: PrimitiveDateTime, value: f64) -> Self {
        Self {
            timestamp,
            value,
            meal: Meal::None,
            comment: String::new(),
            measure_method: MeasureMethod::BloodSample,
        }
    }

    /// Set the meal information.
    #[must_use]
    pub fn with_meal(mut self, meal: Meal) -> Self {
        self.meal = meal;
        self
    }

    /// Set the comment reported by the meter.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the measure method.
    #[must_use]
    pub fn with_measure_method(mut self, measure_method: MeasureMethod) -> Self {
        self.measure_method = measure_method;
        self
    }

    /// Timestamp of the reading as reported by the meter.
    #[must_use]
    pub fn timestamp(&self) -> PrimitiveDateTime {
        self.timestamp
    }

    /// Raw value in mg/dL.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Meal information.
    #[must_use]
    pub fn meal(&self) -> Meal {
        self.meal
    }

    /// Comment reported by the meter, empty if none.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Measure method.
    #[must_use]
    pub fn measure_method(&self) -> MeasureMethod {
        self.measure_method
    }

    /// The reading value converted to the given unit.
    #[must_use]
    pub fn value_as(&self, unit: Unit) -> f64 {
        convert_glucose_unit(self.value, Unit::MgDl, unit)
    }

    /// The reading as a quoted comma-separated line.
    ///
    /// Fields: timestamp, value to two decimals in the given unit, meal
    /// label, measure-method label, comment.
    #[must_use]
    pub fn as_csv(&self, unit: Unit) -> String {
        format!(
            "\"{}\",\"{:.2}\",\"{}\",\"{}\",\"{}\"",
            csv_timestamp(self.timestamp),
            self.value_as(unit),
            self.meal.label(),
            self.measure_method.label(),
            self.comment,
        )
    }

    /// The reading as a Libre import-template row.
    ///
    /// The record type derived from the measure method and comment prefix
    /// selects the single glucose column that receives the value, rounded to
    /// one decimal; every other value column stays blank.
    #[must_use]
    pub fn as_tsv(&self, unit: Unit) -> String {
        let record_type = LibreRecordType::of_glucose(self.measure_method, &self.comment);
        tsv_row(
            self.timestamp,
            record_type,
            format!("{:.1}", self.value_as(unit)),
        )
    }
}

/// A timestamped blood ketone measurement, always in mmol/L.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KetoneReading {
    #[cfg_attr(feature = "serde", serde(with = "timestamp_format"))]
    timestamp: PrimitiveDateTime,
    value: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    comment: String,
}

impl KetoneReading {
    /// Create a reading with the given timestamp and value in mmol/L.
    #[must_use]
    pub fn new(timestamp: PrimitiveDateTime, value: f64) -> Self {
        Self {
            timestamp,
            value,
            comment: String::new(),
        }
    }

    /// Set the comment reported by the meter.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Timestamp of the reading as reported by the meter.
    #[must_use]
    pub fn timestamp(&self) -> PrimitiveDateTime {
        self.timestamp
    }

    /// Value in mmol/L.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Comment reported by the meter, empty if none.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Ketone readings are always taken from a blood sample.
    #[must_use]
    pub fn measure_method(&self) -> MeasureMethod {
        MeasureMethod::BloodSample
    }

    /// The reading value. Ketones are stored in mmol/L already, so the
    /// requested unit does not apply.
    #[must_use]
    pub fn value_as(&self, _unit: Unit) -> f64 {
        self.value
    }

    /// The reading as a quoted comma-separated line.
    ///
    /// Fields: timestamp, value to two decimals, measure-method label,
    /// comment. No meal field.
    #[must_use]
    pub fn as_csv(&self, unit: Unit) -> String {
        format!(
            "\"{}\",\"{:.2}\",\"{}\",\"{}\"",
            csv_timestamp(self.timestamp),
            self.value_as(unit),
            self.measure_method().label(),
            self.comment,
        )
    }

    /// The reading as a Libre import-template row: always record type 3, the
    /// value in the ketone column, all other value columns blank.
    #[must_use]
    pub fn as_tsv(&self, _unit: Unit) -> String {
        tsv_row(
            self.timestamp,
            LibreRecordType::Ketone,
            format_float(self.value),
        )
    }
}

/// A reading retrieved from a meter's data log.
///
/// Drivers return a mixed sequence of glucose and ketone readings; this sum
/// type lets callers sort, filter, and serialize them uniformly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reading {
    /// Blood glucose measurement.
    Glucose(GlucoseReading),
    /// Blood ketone measurement.
    Ketone(KetoneReading),
}

impl Reading {
    /// Timestamp of the reading.
    #[must_use]
    pub fn timestamp(&self) -> PrimitiveDateTime {
        match self {
            Reading::Glucose(reading) => reading.timestamp(),
            Reading::Ketone(reading) => reading.timestamp(),
        }
    }

    /// Raw stored value (mg/dL for glucose, mmol/L for ketones).
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Reading::Glucose(reading) => reading.value(),
            Reading::Ketone(reading) => reading.value(),
        }
    }

    /// Comment reported by the meter.
    #[must_use]
    pub fn comment(&self) -> &str {
        match self {
            Reading::Glucose(reading) => reading.comment(),
            Reading::Ketone(reading) => reading.comment(),
        }
    }

    /// Measure method.
    #[must_use]
    pub fn measure_method(&self) -> MeasureMethod {
        match self {
            Reading::Glucose(reading) => reading.measure_method(),
            Reading::Ketone(reading) => reading.measure_method(),
        }
    }

    /// Whether this is a ketone reading.
    #[must_use]
    pub fn is_ketone(&self) -> bool {
        matches!(self, Reading::Ketone(_))
    }

    /// The reading as a quoted comma-separated line.
    #[must_use]
    pub fn as_csv(&self, unit: Unit) -> String {
        match self {
            Reading::Glucose(reading) => reading.as_csv(unit),
            Reading::Ketone(reading) => reading.as_csv(unit),
        }
    }

    /// The reading as a Libre import-template row.
    #[must_use]
    pub fn as_tsv(&self, unit: Unit) -> String {
        match self {
            Reading::Glucose(reading) => reading.as_tsv(unit),
            Reading::Ketone(reading) => reading.as_tsv(unit),
        }
    }
}

impl From<GlucoseReading> for Reading {
    fn from(reading: GlucoseReading) -> Self {
        Reading::Glucose(reading)
    }
}

impl From<KetoneReading> for Reading {
    fn from(reading: KetoneReading) -> Self {
        Reading::Ketone(reading)
    }
}

/// Timestamp in `YYYY-MM-DD HH:MM:SS` form, as used in CSV output.
pub(crate) fn csv_timestamp(timestamp: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        timestamp.year(),
        u8::from(timestamp.month()),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second(),
    )
}

/// Timestamp in `YYYY/MM/DD HH:MM` form, as used in the Libre template.
fn tsv_timestamp(timestamp: PrimitiveDateTime) -> String {
    format!(
        "{:04}/{:02}/{:02} {:02}:{:02}",
        timestamp.year(),
        u8::from(timestamp.month()),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
    )
}

/// Render a value the way Python's `str()` renders floats: integral values
/// keep a `.0` suffix. The template was built around that rendering.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Build a TSV reading row with the value placed in the column selected by
/// the record type.
fn tsv_row(timestamp: PrimitiveDateTime, record_type: LibreRecordType, value: String) -> String {
    let mut columns = vec![String::new(); TSV_COLUMNS];
    columns[COL_TIME] = tsv_timestamp(timestamp);
    columns[COL_RECORD_TYPE] = record_type.code().to_string();
    if let Some(column) = record_type.value_column() {
        columns[column] = value;
    }
    columns.join("\t")
}

#[cfg(feature = "serde")]
mod timestamp_format {
    //! Serde helper storing timestamps as `YYYY-MM-DD HH:MM:SS` strings, the
    //! same format the CSV output uses.

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;

    const FORMAT: &[BorrowedFormatItem<'_>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    pub fn serialize<S: Serializer>(
        timestamp: &PrimitiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::csv_timestamp(*timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PrimitiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PrimitiveDateTime::parse(&raw, FORMAT).map_err(D::Error::custom)
    }
}
