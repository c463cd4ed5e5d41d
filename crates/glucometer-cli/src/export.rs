//! Export file writer.
//!
//! Produces a tab-separated file in the layout of the FreeStyle Libre
//! desktop software's data export, so the readings can be fed back into
//! tooling that consumes that format. Lines end in CRLF, values are always
//! expressed in mmol/L.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::PrimitiveDateTime;

use glucometer_types::{Reading, Unit};

/// Uploader name and ID lines the import template expects at the top.
const PREAMBLE: &str = "Some guy\r\n# 000000001\r\n";

const COLUMN_HEADER: &str = "ID\tTime\tRecord Type\
\tHistoric Glucose (mmol/L)\tScan Glucose (mmol/L)\
\tNon-numeric Rapid-Acting Insulin\tRapid-Acting Insulin (units)\
\tNon-numeric Food\tCarbohydrates (grams)\
\tNon-numeric Long-Acting Insulin\tLong-Acting Insulin (units)\
\tNotes\tStrip Glucose (mmol/L)\tKetone (mmol/L)\
\tMeal Insulin (units)\tCorrection Insulin (units)\
\tUser Change Insulin (units)\tPrevious Time\tUpdated Time\r\n";

/// The template's value columns are labelled mmol/L.
const EXPORT_UNIT: Unit = Unit::MmolL;

/// Write `readings` into `folder` as `YYYYMMDDHHMMSS.csv`, named after
/// `now`. Returns the path of the file written.
pub fn write_export(
    folder: &Path,
    readings: &[Reading],
    now: PrimitiveDateTime,
) -> Result<PathBuf> {
    let path = folder.join(format!("{}.csv", file_stamp(now)));

    let mut contents = String::from(PREAMBLE);
    contents.push_str(COLUMN_HEADER);
    for (index, reading) in readings.iter().enumerate() {
        let _ = write!(
            contents,
            "{}\t{}\r\n",
            index + 1,
            reading.as_tsv(EXPORT_UNIT)
        );
    }

    fs::write(&path, &contents).with_context(|| format!("failed to write {}", path.display()))?;

    // The downstream import workflow picks the file up from a shared folder
    // and expects it world-writable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o777))
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(path)
}

fn file_stamp(now: PrimitiveDateTime) -> String {
    format!(
        "{:04}{:02}{:02}{:02}{:02}{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use glucometer_types::{GlucoseReading, KetoneReading, Meal, MeasureMethod};

    use super::*;

    fn sample_readings() -> Vec<Reading> {
        vec![
            GlucoseReading::new(datetime!(2018-06-05 12:00:00), 100.8)
                .with_meal(Meal::Before)
                .with_measure_method(MeasureMethod::Cgm)
                .with_comment("(Sensor)")
                .into(),
            KetoneReading::new(datetime!(2018-06-05 18:30:00), 0.6).into(),
        ]
    }

    #[test]
    fn test_export_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), &[], datetime!(2018-06-05 12:34:56)).unwrap();
        assert_eq!(path, dir.path().join("20180605123456.csv"));
        assert!(path.is_file());
    }

    #[test]
    fn test_export_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            write_export(dir.path(), &sample_readings(), datetime!(2018-06-05 20:00:00)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.split("\r\n").collect();

        assert_eq!(lines[0], "Some guy");
        assert_eq!(lines[1], "# 000000001");
        assert!(lines[2].starts_with("ID\tTime\tRecord Type\t"));
        assert!(lines[2].ends_with("\tPrevious Time\tUpdated Time"));
        assert_eq!(lines[2].matches('\t').count(), 18);

        // Row IDs are assigned sequentially from 1.
        assert!(lines[3].starts_with("1\t2018/06/05 12:00\t0\t5.6\t\t"));
        assert!(lines[4].starts_with("2\t2018/06/05 18:30\t3\t"));
        assert_eq!(lines[5], "");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_export_rows_have_all_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            write_export(dir.path(), &sample_readings(), datetime!(2018-06-05 20:00:00)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        for row in contents.split("\r\n").skip(3).filter(|row| !row.is_empty()) {
            // 19 reading columns plus the prepended ID.
            assert_eq!(row.matches('\t').count(), 19, "row: {row:?}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_export_is_world_writable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), &[], datetime!(2018-06-05 20:00:00)).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o777);
    }
}
