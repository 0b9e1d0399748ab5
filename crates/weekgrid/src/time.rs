//! Time-of-day parsing -- "H:mm" strings to minute-of-day offsets.

use crate::error::{Result, ScheduleError};

/// Minutes in one wall-clock day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parse an "H:mm" string into a minute-of-day offset.
///
/// The input must be exactly two colon-separated fields, each parsing as a
/// non-negative integer. Zero-padding is not required: `"7:05"` and `"07:05"`
/// both yield 425.
///
/// No range check is applied to the fields. Callers are expected to supply
/// hours 0-23 and minutes 0-59, but `"25:00"` still parses to 1500 and
/// downstream comparisons treat it literally.
///
/// # Errors
/// Returns [`ScheduleError::Format`] for any other field count, non-numeric
/// content, or empty field.
pub fn parse_hm(input: &str) -> Result<u32> {
    let mut fields = input.split(':');
    let (Some(h), Some(m), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ScheduleError::Format(input.to_string()));
    };

    let hours: u32 = h
        .parse()
        .map_err(|_| ScheduleError::Format(input.to_string()))?;
    let minutes: u32 = m
        .parse()
        .map_err(|_| ScheduleError::Format(input.to_string()))?;

    Ok(hours * 60 + minutes)
}
