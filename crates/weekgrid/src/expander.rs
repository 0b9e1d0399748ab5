//! Block expansion -- converts weekly blocks into canonical day-scoped intervals.
//!
//! This is the single place midnight wraparound is handled. Every other
//! component operates on already-expanded intervals and never special-cases
//! a block that crosses midnight.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::time::{parse_hm, MINUTES_PER_DAY};

/// Days in the weekly cycle. Day indices wrap modulo this.
pub const DAYS_PER_WEEK: u8 = 7;

/// A single scheduled occurrence on one weekday.
///
/// `day` uses the 0 = Sunday … 6 = Saturday encoding. `start` and `end` are
/// "H:mm" time-of-day strings; an end numerically before the start means the
/// block continues past midnight into the next weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub day: u8,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// A day-scoped, half-open minute range derived from a [`Block`].
///
/// Invariant: `0 <= start_min < end_min <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub day: u8,
    pub start_min: u32,
    pub end_min: u32,
}

/// Expand a block into its canonical intervals.
///
/// - `start < end` → one interval on `block.day`
/// - `start > end` (crosses midnight) → two intervals: `(day, start, 1440)`
///   and `((day + 1) % 7, 0, end)`
/// - `start == end` or either time unparsable → empty vec
///
/// Never fails; invalid input degrades to an empty expansion. Callers that
/// need a hard rejection run [`validate_block`] first.
pub fn expand_block(block: &Block) -> Vec<Interval> {
    let (Ok(start), Ok(end)) = (parse_hm(&block.start), parse_hm(&block.end)) else {
        return Vec::new();
    };

    if start < end {
        return vec![Interval {
            day: block.day,
            start_min: start,
            end_min: end,
        }];
    }

    if start > end {
        return vec![
            Interval {
                day: block.day,
                start_min: start,
                end_min: MINUTES_PER_DAY,
            },
            Interval {
                day: (block.day % DAYS_PER_WEEK + 1) % DAYS_PER_WEEK,
                start_min: 0,
                end_min: end,
            },
        ];
    }

    // start == end: zero duration, no interval
    Vec::new()
}

/// Validate a block's structure before any overlap or mutation work.
///
/// This is the one mandatory gate in front of [`find_conflicts`]: both times
/// must parse, they must differ, and the day index must be in range. Overlap
/// detection on a block that fails this check is meaningless (it expands to
/// nothing) and must never be attempted.
///
/// [`find_conflicts`]: crate::conflict::find_conflicts
///
/// # Errors
/// [`ScheduleError::Format`] if either time string fails to parse,
/// [`ScheduleError::ZeroDuration`] if start equals end,
/// [`ScheduleError::InvalidDay`] if `day > 6`.
pub fn validate_block(block: &Block) -> Result<()> {
    if block.day >= DAYS_PER_WEEK {
        return Err(ScheduleError::InvalidDay(block.day));
    }

    let start = parse_hm(&block.start)?;
    let end = parse_hm(&block.end)?;

    if start == end {
        return Err(ScheduleError::ZeroDuration(block.start.clone()));
    }

    Ok(())
}
