/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! FIX wire time formats.
//!
//! UTCTimestamp fields are formatted as `YYYYMMDD-HH:MM:SS` with an optional
//! fractional part of millisecond, microsecond, or nanosecond precision.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a FIX UTCTimestamp value.
///
/// Accepts `YYYYMMDD-HH:MM:SS` with or without a fractional seconds part.
///
/// # Arguments
/// * `s` - The wire representation
///
/// # Returns
/// The parsed timestamp, or `None` if the value does not match the format.
#[must_use]
pub fn parse_utc_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y%m%d-%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y%m%d-%H:%M:%S"))
        .ok()
}

/// Parses a FIX UTCDateOnly value (`YYYYMMDD`).
#[must_use]
pub fn parse_utc_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d").ok()
}

/// Parses a FIX UTCTimeOnly value (`HH:MM:SS[.sss]`).
#[must_use]
pub fn parse_utc_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Formats a timestamp back to the FIX wire representation with millisecond
/// precision.
///
/// # Arguments
/// * `ts` - The timestamp to format
#[must_use]
pub fn format_utc_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y%m%d-%H:%M:%S%.3f").to_string()
}
