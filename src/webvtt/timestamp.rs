//! WebVTT cue timestamp handling.
//!
//! Timestamps are `mm:ss.mmm` with an optional hours component
//! (`hh:mm:ss.mmm`, hours may exceed two digits); minutes and seconds are
//! two digits below 60, the fraction is exactly three digits.

use crate::error::{Result, VttError};

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Parse a cue timestamp into milliseconds.
pub fn parse_timestamp(input: &str) -> Result<u64> {
    let bad = || VttError::InvalidTimestamp(input.to_string());

    let (clock, fraction) = input.split_once('.').ok_or_else(bad)?;
    if fraction.len() != 3 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let millis: u64 = fraction.parse().map_err(|_| bad())?;

    let fields: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => ("0", *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return Err(bad()),
    };
    if minutes.len() != 2 || seconds.len() != 2 || hours.is_empty() {
        return Err(bad());
    }
    for field in [hours, minutes, seconds] {
        if !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
    }

    let hours: u64 = hours.parse().map_err(|_| bad())?;
    let minutes: u64 = minutes.parse().map_err(|_| bad())?;
    let seconds: u64 = seconds.parse().map_err(|_| bad())?;
    if minutes >= 60 || seconds >= 60 {
        return Err(bad());
    }

    Ok(hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis)
}

/// Render milliseconds as an `hh:mm:ss.mmm` cue timestamp.
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}
