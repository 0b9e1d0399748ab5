//! Detect overlapping blocks within a schedule.
//!
//! Comparison happens on expanded intervals, so a block that crosses midnight
//! conflicts on both weekdays it touches. Adjacent blocks (where one ends
//! exactly when another starts) are NOT conflicts.

use serde::{Deserialize, Serialize};

use crate::expander::{expand_block, Block};

/// Wire-shaped summary of a conflicting block, as enumerated in a conflict
/// response: `{ id, day, start, end, title }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictingBlock {
    pub id: String,
    pub day: u8,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl From<&Block> for ConflictingBlock {
    fn from(block: &Block) -> Self {
        ConflictingBlock {
            id: block.id.clone(),
            day: block.day,
            start: block.start.clone(),
            end: block.end.clone(),
            title: block.title.clone(),
        }
    }
}

/// Two half-open minute ranges overlap iff `max(starts) < min(ends)`.
///
/// Strict inequality: one block ending at 10:00 and another starting at
/// 10:00 do not overlap.
pub(crate) fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

/// Find the existing blocks whose intervals overlap the candidate's.
///
/// Each conflicting block is returned at most once, in the order it appears
/// in `existing`, even when several interval pairs collide. Intervals only
/// compare on the same weekday.
///
/// A candidate that expands to zero intervals (unparsable times or zero
/// duration) yields an empty result: no meaningful comparison is possible.
/// Callers must reject such a candidate with
/// [`validate_block`](crate::expander::validate_block) before calling this.
pub fn find_conflicts(candidate: &Block, existing: &[Block]) -> Vec<Block> {
    let candidate_intervals = expand_block(candidate);
    if candidate_intervals.is_empty() {
        return Vec::new();
    }

    let mut conflicts = Vec::new();
    for block in existing {
        let hit = expand_block(block).iter().any(|existing_iv| {
            candidate_intervals.iter().any(|candidate_iv| {
                existing_iv.day == candidate_iv.day
                    && overlaps(
                        existing_iv.start_min,
                        existing_iv.end_min,
                        candidate_iv.start_min,
                        candidate_iv.end_min,
                    )
            })
        });
        if hit {
            conflicts.push(block.clone());
        }
    }

    conflicts
}
