//! # weekgrid
//!
//! Weekly time-block engine: midnight-aware interval expansion, overlap
//! detection, and previous/current/next classification.
//!
//! Blocks live on a repeating seven-day grid (0 = Sunday … 6 = Saturday)
//! with "H:mm" start/end times. A block whose end is numerically before its
//! start crosses midnight and occupies two weekdays. All operations are pure
//! functions of their inputs -- no I/O, no ambient clock, no shared state.
//!
//! ## Quick start
//!
//! ```rust
//! use weekgrid::{expand_block, find_conflicts, Block};
//!
//! let night_shift = Block {
//!     id: "b1".into(),
//!     day: 1,
//!     start: "22:00".into(),
//!     end: "02:00".into(),
//!     title: Some("Night shift".into()),
//!     tag: None,
//! };
//!
//! // Crossing midnight splits into two day-scoped intervals.
//! let intervals = expand_block(&night_shift);
//! assert_eq!(intervals.len(), 2);
//!
//! // An early Tuesday block collides with the Monday shift's tail.
//! let candidate = Block {
//!     id: "b2".into(),
//!     day: 2,
//!     start: "1:00".into(),
//!     end: "1:30".into(),
//!     title: None,
//!     tag: None,
//! };
//! assert_eq!(find_conflicts(&candidate, &[night_shift]).len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`time`] — "H:mm" string → minute-of-day offset
//! - [`expander`] — block → canonical day-scoped intervals (midnight split)
//! - [`conflict`] — overlap detection between a candidate and existing blocks
//! - [`classify`] — instant → previous/current/next activity
//! - [`schedule`] — in-memory schedule aggregate with validated mutations
//! - [`error`] — error types

pub mod classify;
pub mod conflict;
pub mod error;
pub mod expander;
pub mod schedule;
pub mod time;

pub use classify::{classify, classify_at, Activity, Classification};
pub use conflict::{find_conflicts, ConflictingBlock};
pub use error::ScheduleError;
pub use expander::{expand_block, validate_block, Block, Interval, DAYS_PER_WEEK};
pub use schedule::{BlockPatch, Schedule, Tag};
pub use time::{parse_hm, MINUTES_PER_DAY};
