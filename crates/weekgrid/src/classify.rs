//! Classify an instant against a schedule's blocks into previous / current /
//! next activity.
//!
//! Works on expanded intervals, so the early-morning tail of a block that
//! started the previous evening counts as "today". When nothing is left
//! today, the search scans forward up to six days for the next activity.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::expander::{expand_block, Block, Interval, DAYS_PER_WEEK};

/// Descriptor for one classification slot, copied verbatim from the source
/// block -- start/end are the block's original "H:mm" strings, not re-derived
/// from the matched interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: Option<String>,
    pub start: String,
    pub end: String,
    pub tag: Option<String>,
}

impl From<&Block> for Activity {
    fn from(block: &Block) -> Self {
        Activity {
            id: block.id.clone(),
            title: block.title.clone(),
            start: block.start.clone(),
            end: block.end.clone(),
            tag: block.tag.clone(),
        }
    }
}

/// Result of classifying one instant. Each slot is `None` when no block
/// qualifies. Computed fresh per query, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub previous: Option<Activity>,
    pub current: Option<Activity>,
    pub next: Option<Activity>,
}

/// Expand every block and collect the intervals landing on `day`, paired
/// with their source block, sorted ascending by start minute.
///
/// The sort is stable, so intervals starting at the same minute keep the
/// original block order.
fn day_entries<'a>(blocks: &'a [Block], day: u8) -> Vec<(Interval, &'a Block)> {
    let mut entries: Vec<(Interval, &Block)> = blocks
        .iter()
        .flat_map(|block| {
            expand_block(block)
                .into_iter()
                .filter(|iv| iv.day == day)
                .map(move |iv| (iv, block))
        })
        .collect();
    entries.sort_by_key(|(iv, _)| iv.start_min);
    entries
}

/// Classify a weekday + minute-of-day position against a block list.
///
/// Scans today's sorted entries once: an entry containing the instant wins
/// as `current` with its list neighbors as `previous`/`next`; otherwise the
/// first entry starting after the instant becomes `next`. When today is
/// exhausted, `previous` is today's last entry (if any) and `next` comes
/// from the first of the following six days with any activity.
pub fn classify_at(blocks: &[Block], day: u8, minutes_now: u32) -> Classification {
    let today = day_entries(blocks, day);

    for (i, (iv, block)) in today.iter().enumerate() {
        if iv.start_min <= minutes_now && minutes_now < iv.end_min {
            return Classification {
                previous: previous_of(&today, i),
                current: Some(Activity::from(*block)),
                next: today.get(i + 1).map(|(_, b)| Activity::from(*b)),
            };
        }
        if minutes_now < iv.start_min {
            return Classification {
                previous: previous_of(&today, i),
                current: None,
                next: Some(Activity::from(*block)),
            };
        }
    }

    // Everything today (if anything) is already over.
    let previous = today.last().map(|(_, b)| Activity::from(*b));

    let mut next = None;
    for d in 1..DAYS_PER_WEEK {
        let day_to_check = (day % DAYS_PER_WEEK + d) % DAYS_PER_WEEK;
        if let Some((_, block)) = day_entries(blocks, day_to_check).first() {
            next = Some(Activity::from(*block));
            break;
        }
    }

    Classification {
        previous,
        current: None,
        next,
    }
}

/// Classify a wall-clock instant against a block list.
///
/// The weekday uses the same 0 = Sunday … 6 = Saturday encoding as
/// [`Block::day`]. There is no ambient clock: callers always pass the
/// instant explicitly.
pub fn classify(blocks: &[Block], now: NaiveDateTime) -> Classification {
    let day = now.weekday().num_days_from_sunday() as u8;
    let minutes_now = now.hour() * 60 + now.minute();
    classify_at(blocks, day, minutes_now)
}

fn previous_of(entries: &[(Interval, &Block)], i: usize) -> Option<Activity> {
    if i > 0 {
        entries.get(i - 1).map(|(_, b)| Activity::from(*b))
    } else {
        None
    }
}
