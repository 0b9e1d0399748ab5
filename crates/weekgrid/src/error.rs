//! Error types for weekgrid operations.

use thiserror::Error;

use crate::conflict::ConflictingBlock;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The time string was not two colon-separated numeric fields.
    #[error("Invalid time string: {0:?} (expected H:mm)")]
    Format(String),

    /// Start and end parse to the same minute -- zero-duration blocks are rejected.
    #[error("Zero-duration block: start and end are both {0:?}")]
    ZeroDuration(String),

    /// Day index outside 0 (Sunday) ..= 6 (Saturday).
    #[error("Invalid day index: {0} (expected 0-6)")]
    InvalidDay(u8),

    /// The candidate block overlaps one or more existing blocks.
    /// Carries the full list so callers can report specifics, not just a boolean.
    #[error("Block overlaps {} existing block(s)", .conflicts.len())]
    Conflict { conflicts: Vec<ConflictingBlock> },

    /// A schedule mutation referenced a block id that is not in the schedule.
    #[error("No block with id {0:?}")]
    UnknownBlock(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
