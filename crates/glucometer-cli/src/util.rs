//! Datetime parsing and formatting helpers.

use anyhow::{Result, anyhow};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const DATETIME_FORMATS: &[&[BorrowedFormatItem<'_>]] = &[
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second]"),
    format_description!("[year]/[month]/[day] [hour]:[minute]"),
];

/// Parse a user-supplied datetime.
///
/// Accepts RFC 3339 as well as `YYYY-MM-DD HH:MM[:SS]` and the slash-separated
/// variant. RFC 3339 offsets are dropped, meters keep naive local time.
pub fn parse_datetime(raw: &str) -> Result<PrimitiveDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(PrimitiveDateTime::new(parsed.date(), parsed.time()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = PrimitiveDateTime::parse(raw, format) {
            return Ok(parsed);
        }
    }
    Err(anyhow!("{raw}: not a valid date"))
}

/// Render a datetime the way readings show it, `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_datetime(datetime: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        datetime.year(),
        u8::from(datetime.month()),
        datetime.day(),
        datetime.hour(),
        datetime.minute(),
        datetime.second()
    )
}
