//! Mock meter driver.
//!
//! Doubles as the test double for the frontends and as a selectable driver
//! (`--driver mock`): without a device path it serves a small built-in data
//! log, with one it loads readings from a JSON fixture file, so dumps and
//! exports can be reproduced without hardware.
//!
//! # Features
//!
//! - **Failure injection**: make every operation fail with a given message
//! - **Settable clock**: `set_datetime` only affects the in-memory state
//! - **Builder**: [`MockMeterBuilder`] for test setup

use std::fs;
use std::path::Path;

use time::PrimitiveDateTime;
use time::macros::datetime;
use tracing::debug;

use glucometer_types::{
    GlucoseReading, KetoneReading, Meal, MeasureMethod, MeterInfo, Reading, Unit,
};

use crate::clock;
use crate::error::{Error, Result};
use crate::meter::Meter;

const DESCRIPTION: &str = "\
Mock glucometer driver.

Supports every operation without hardware. The data log is a small built-in
sample, or the contents of a JSON fixture file when a device path is given
(an array of readings as serialized by glucometer-types). Clock changes and
log zeroing only affect the in-memory state.";

/// A mock glucometer for testing and demonstration.
#[derive(Debug)]
pub struct MockMeter {
    connected: bool,
    info: MeterInfo,
    readings: Vec<Reading>,
    clock: Option<PrimitiveDateTime>,
    fail_message: Option<String>,
}

impl MockMeter {
    /// Open the mock meter, loading the data log from `device` when given.
    pub fn open(device: Option<&str>) -> Result<Self> {
        let readings = match device {
            Some(path) => Self::load_fixture(Path::new(path))?,
            None => Self::sample_readings(),
        };

        Ok(Self {
            connected: false,
            info: Self::default_info(),
            readings,
            clock: None,
            fail_message: None,
        })
    }

    fn default_info() -> MeterInfo {
        MeterInfo::new("Mock glucometer")
            .with_serial_number("MOCK-00001")
            .with_version_info(["Software 1.0"])
            .with_native_unit(Unit::MgDl)
    }

    fn load_fixture(path: &Path) -> Result<Vec<Reading>> {
        let raw = fs::read_to_string(path)?;
        let readings: Vec<Reading> = serde_json::from_str(&raw).map_err(|err| {
            Error::invalid_response(format!("malformed fixture {}: {err}", path.display()))
        })?;
        debug!(count = readings.len(), "loaded readings from fixture");
        Ok(readings)
    }

    fn sample_readings() -> Vec<Reading> {
        vec![
            GlucoseReading::new(datetime!(2018-01-01 07:55:00), 98.0)
                .with_meal(Meal::Before)
                .with_comment("(Blood) fasting")
                .into(),
            GlucoseReading::new(datetime!(2018-01-01 12:30:00), 132.0)
                .with_meal(Meal::After)
                .with_measure_method(MeasureMethod::Cgm)
                .with_comment("(Sensor) lunch")
                .into(),
            KetoneReading::new(datetime!(2018-01-01 18:00:00), 0.3).into(),
        ]
    }

    /// Make every subsequent operation fail with the given message, or stop
    /// failing when `None`.
    pub fn set_should_fail(&mut self, message: Option<&str>) {
        self.fail_message = message.map(String::from);
    }

    /// Check if connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn check_ready(&self) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        if let Some(message) = &self.fail_message {
            return Err(Error::invalid_response(message.clone()));
        }
        Ok(())
    }
}

impl Meter for MockMeter {
    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn connect(&mut self) -> Result<()> {
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }

    fn meter_info(&mut self) -> Result<MeterInfo> {
        self.check_ready()?;
        Ok(self.info.clone())
    }

    fn get_datetime(&mut self) -> Result<PrimitiveDateTime> {
        self.check_ready()?;
        Ok(self.clock.unwrap_or_else(clock::now))
    }

    fn set_datetime(&mut self, datetime: Option<PrimitiveDateTime>) -> Result<PrimitiveDateTime> {
        self.check_ready()?;
        let datetime = datetime.unwrap_or_else(clock::now);
        self.clock = Some(datetime);
        Ok(datetime)
    }

    fn get_readings(&mut self) -> Result<Vec<Reading>> {
        self.check_ready()?;
        Ok(self.readings.clone())
    }

    fn zero_log(&mut self) -> Result<()> {
        self.check_ready()?;
        self.readings.clear();
        Ok(())
    }
}

/// Builder for mock meters with custom state, used in tests.
#[derive(Debug)]
pub struct MockMeterBuilder {
    info: MeterInfo,
    readings: Vec<Reading>,
    clock: Option<PrimitiveDateTime>,
    auto_connect: bool,
}

impl Default for MockMeterBuilder {
    fn default() -> Self {
        Self {
            info: MockMeter::default_info(),
            readings: Vec::new(),
            clock: None,
            auto_connect: true,
        }
    }
}

impl MockMeterBuilder {
    /// Create a new builder with an empty data log, connected by default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the meter information.
    #[must_use]
    pub fn meter_info(mut self, info: MeterInfo) -> Self {
        self.info = info;
        self
    }

    /// Set the native unit on the meter information.
    #[must_use]
    pub fn native_unit(mut self, unit: Unit) -> Self {
        self.info.native_unit = unit;
        self
    }

    /// Append one reading to the data log.
    #[must_use]
    pub fn reading(mut self, reading: impl Into<Reading>) -> Self {
        self.readings.push(reading.into());
        self
    }

    /// Replace the whole data log.
    #[must_use]
    pub fn readings(mut self, readings: Vec<Reading>) -> Self {
        self.readings = readings;
        self
    }

    /// Fix the meter clock instead of following the wall clock.
    #[must_use]
    pub fn clock(mut self, clock: PrimitiveDateTime) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set whether the meter starts out connected.
    #[must_use]
    pub fn auto_connect(mut self, auto_connect: bool) -> Self {
        self.auto_connect = auto_connect;
        self
    }

    /// Build the mock meter.
    #[must_use]
    pub fn build(self) -> MockMeter {
        MockMeter {
            connected: self.auto_connect,
            info: self.info,
            readings: self.readings,
            clock: self.clock,
            fail_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_connect_lifecycle() {
        let mut meter = MockMeter::open(None).unwrap();
        assert!(!meter.is_connected());

        meter.connect().unwrap();
        assert!(meter.is_connected());

        meter.disconnect().unwrap();
        assert!(!meter.is_connected());
    }

    #[test]
    fn test_operations_require_connection() {
        let mut meter = MockMeter::open(None).unwrap();
        assert!(matches!(meter.get_readings(), Err(Error::NotConnected)));
        assert!(matches!(meter.meter_info(), Err(Error::NotConnected)));
        assert!(matches!(meter.zero_log(), Err(Error::NotConnected)));
    }

    #[test]
    fn test_sample_readings() {
        let mut meter = MockMeter::open(None).unwrap();
        meter.connect().unwrap();

        let readings = meter.get_readings().unwrap();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings.iter().filter(|r| r.is_ketone()).count(), 1);
    }

    #[test]
    fn test_zero_log_clears_readings() {
        let mut meter = MockMeter::open(None).unwrap();
        meter.connect().unwrap();

        meter.zero_log().unwrap();
        assert!(meter.get_readings().unwrap().is_empty());
    }

    #[test]
    fn test_clock_round_trip() {
        let mut meter = MockMeterBuilder::new().build();

        let stamp = datetime!(2020-05-04 10:20:30);
        assert_eq!(meter.set_datetime(Some(stamp)).unwrap(), stamp);
        assert_eq!(meter.get_datetime().unwrap(), stamp);
    }

    #[test]
    fn test_set_datetime_now() {
        let mut meter = MockMeterBuilder::new().build();
        let before = clock::now();
        let stored = meter.set_datetime(None).unwrap();
        assert!(stored >= before);
    }

    #[test]
    fn test_failure_injection() {
        let mut meter = MockMeterBuilder::new().build();
        meter.set_should_fail(Some("checksum mismatch"));

        let err = meter.get_readings().unwrap_err();
        assert!(err.to_string().contains("checksum mismatch"));

        meter.set_should_fail(None);
        assert!(meter.get_readings().is_ok());
    }

    #[test]
    fn test_fixture_round_trip() {
        let readings = vec![
            Reading::Glucose(
                GlucoseReading::new(datetime!(2019-03-01 09:00:00), 110.0)
                    .with_comment("(Blood) breakfast"),
            ),
            Reading::Ketone(KetoneReading::new(datetime!(2019-03-01 21:00:00), 0.5)),
        ];

        let mut fixture = tempfile::NamedTempFile::new().unwrap();
        fixture
            .write_all(serde_json::to_string(&readings).unwrap().as_bytes())
            .unwrap();

        let mut meter = MockMeter::open(fixture.path().to_str()).unwrap();
        meter.connect().unwrap();
        assert_eq!(meter.get_readings().unwrap(), readings);
    }

    #[test]
    fn test_malformed_fixture() {
        let mut fixture = tempfile::NamedTempFile::new().unwrap();
        fixture.write_all(b"{not json").unwrap();

        let err = MockMeter::open(fixture.path().to_str()).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_missing_fixture_is_io_error() {
        let err = MockMeter::open(Some("/nonexistent/readings.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_builder() {
        let mut meter = MockMeterBuilder::new()
            .native_unit(Unit::MmolL)
            .reading(GlucoseReading::new(datetime!(2020-01-01 08:00:00), 90.0))
            .clock(datetime!(2020-01-01 09:00:00))
            .build();

        assert!(meter.is_connected());
        assert_eq!(meter.meter_info().unwrap().native_unit, Unit::MmolL);
        assert_eq!(meter.get_readings().unwrap().len(), 1);
        assert_eq!(
            meter.get_datetime().unwrap(),
            datetime!(2020-01-01 09:00:00)
        );
    }
}
