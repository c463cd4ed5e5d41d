//! `datetime`: read or set the meter clock.

use anyhow::Result;

use glucometer_core::Meter;

use crate::util::{format_datetime, parse_datetime};

pub fn cmd_datetime(meter: &mut dyn Meter, set: Option<&str>) -> Result<()> {
    let datetime = match set {
        None => meter.get_datetime()?,
        Some("now") => meter.set_datetime(None)?,
        Some(raw) => meter.set_datetime(Some(parse_datetime(raw)?))?,
    };
    println!("{}", format_datetime(datetime));
    Ok(())
}
