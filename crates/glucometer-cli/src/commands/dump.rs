//! `dump`: print the device data log as CSV, or export it to a file.

use anyhow::Result;
use tracing::debug;

use glucometer_core::{Meter, clock};
use glucometer_types::{MeterInfo, Reading};

use crate::cli::{DumpArgs, SortField};
use crate::export;

pub fn cmd_dump(meter: &mut dyn Meter, info: &MeterInfo, args: &DumpArgs) -> Result<()> {
    let unit = args.unit.unwrap_or(info.native_unit);

    let mut readings = meter.get_readings()?;
    debug!(count = readings.len(), "readings retrieved");

    if !args.with_ketone {
        readings.retain(|reading| !reading.is_ketone());
    }

    sort_readings(&mut readings, args.sort_by);

    if args.to_file {
        let now = clock::now();
        // A meter clock that drifted ahead can date readings in the future;
        // those would break the chronology of the exported log.
        readings.retain(|reading| reading.timestamp() <= now);
        let path = export::write_export(&args.output_folder, &readings, now)?;
        debug!(path = %path.display(), rows = readings.len(), "export written");
    } else {
        for reading in &readings {
            println!("{}", reading.as_csv(unit));
        }
    }

    Ok(())
}

fn sort_readings(readings: &mut [Reading], sort_by: SortField) {
    match sort_by {
        SortField::Timestamp => readings.sort_by_key(Reading::timestamp),
        SortField::Value => readings.sort_by(|a, b| a.value().total_cmp(&b.value())),
        SortField::Comment => readings.sort_by(|a, b| a.comment().cmp(b.comment())),
        SortField::MeasureMethod => readings.sort_by_key(Reading::measure_method),
    }
}
