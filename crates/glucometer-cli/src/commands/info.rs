//! `info`: show the meter identification and its clock.

use anyhow::Result;

use glucometer_core::{Error, Meter};
use glucometer_types::MeterInfo;

use crate::util::format_datetime;

pub fn cmd_info(meter: &mut dyn Meter, info: &MeterInfo) -> Result<()> {
    print!("{}", render(meter, info)?);
    Ok(())
}

fn render(meter: &mut dyn Meter, info: &MeterInfo) -> Result<String> {
    let time = match meter.get_datetime() {
        Ok(datetime) => format_datetime(datetime),
        Err(Error::NotSupported(_)) => "N/A".to_string(),
        Err(err) => return Err(err.into()),
    };
    Ok(format!("{info}Time: {time}\n"))
}
