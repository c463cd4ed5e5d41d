//! Wall-clock access shared by drivers and frontends.

use time::{OffsetDateTime, PrimitiveDateTime};

/// Current local time as a naive datetime, matching how meters keep their
/// clocks. Falls back to UTC when the local offset cannot be determined
/// (for example in threaded test runners on unix).
#[must_use]
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}
