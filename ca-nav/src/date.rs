//! Display-only parsing of ISO local date-times.
//!
//! The result carries the wall-clock fields of the input's UTC reading,
//! stamped with the caller's timezone. It is not a real instant: do not
//! compare or do arithmetic with it across timezones.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

use crate::error::DateError;

/// Formats accepted for date-times without an offset (read as local time).
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse `s` and rebuild it in the local timezone from its UTC fields.
pub fn parse_iso_local_date(s: &str) -> Result<DateTime<Local>, DateError> {
    parse_iso_local_date_in(s, &Local)
}

/// [`parse_iso_local_date`] against an explicit timezone.
///
/// - `2010-05-22` is midnight UTC.
/// - `2010-05-22T16:00:00` is a wall-clock time in `tz`.
/// - `2010-05-22T16:00:00Z` and `…+05:00` are absolute.
///
/// The UTC year/month/day/hour/minute/second of that instant become local
/// fields in `tz`. Sub-second precision is dropped.
pub fn parse_iso_local_date_in<Tz: TimeZone>(
    s: &str,
    tz: &Tz,
) -> Result<DateTime<Tz>, DateError> {
    let fields = utc_fields(s.trim(), tz)?;
    let fields = fields.with_nanosecond(0).unwrap_or(fields);

    tz.from_local_datetime(&fields)
        .earliest()
        .ok_or(DateError::NonexistentLocal(fields))
}

fn utc_fields<Tz: TimeZone>(s: &str, tz: &Tz) -> Result<NaiveDateTime, DateError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(instant.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    for format in LOCAL_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(s, format) {
            return tz
                .from_local_datetime(&local)
                .earliest()
                .map(|instant| instant.naive_utc())
                .ok_or(DateError::NonexistentLocal(local));
        }
    }

    Err(DateError::Invalid(s.to_string()))
}
