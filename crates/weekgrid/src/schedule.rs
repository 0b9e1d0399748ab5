//! In-memory schedule aggregate with validated block mutations.
//!
//! A [`Schedule`] exclusively owns its blocks; every mutation runs format and
//! degeneracy validation, then overlap detection, before the block list is
//! touched. Requiring `&mut self` means two mutations of the same schedule
//! instance cannot interleave their check-then-write steps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::classify::{classify, Classification};
use crate::conflict::{find_conflicts, ConflictingBlock};
use crate::error::{Result, ScheduleError};
use crate::expander::{validate_block, Block};

/// A named weekly schedule: an insertion-ordered collection of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A label that blocks can reference by id. Owned outside any schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Tag {
            id: id.into(),
            name: name.into(),
            color: "#1976D2".to_string(),
            description: None,
        }
    }
}

/// Partial update for one block. `None` fields keep the stored value, so a
/// patch cannot clear a title or tag, only replace it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockPatch {
    pub day: Option<u8>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub title: Option<String>,
    pub tag: Option<String>,
}

impl Schedule {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Schedule {
            id: id.into(),
            name: name.into(),
            owner: None,
            blocks: Vec::new(),
        }
    }

    /// Add a block after validating it and checking for overlaps.
    ///
    /// # Errors
    /// Format/degeneracy/day errors from
    /// [`validate_block`](crate::expander::validate_block), or
    /// [`ScheduleError::Conflict`] listing every overlapped block.
    pub fn add_block(&mut self, block: Block) -> Result<()> {
        validate_block(&block)?;

        let conflicts = find_conflicts(&block, &self.blocks);
        if !conflicts.is_empty() {
            return Err(ScheduleError::Conflict {
                conflicts: conflicts.iter().map(ConflictingBlock::from).collect(),
            });
        }

        self.blocks.push(block);
        Ok(())
    }

    /// Apply a partial update to the block with `block_id`.
    ///
    /// The candidate (patched day/start/end over the stored values) is
    /// validated and conflict-checked against every *other* block before any
    /// field is written, so a failed update leaves the block untouched.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownBlock`] if no block has `block_id`; otherwise
    /// the same errors as [`Schedule::add_block`].
    pub fn update_block(&mut self, block_id: &str, patch: BlockPatch) -> Result<()> {
        let index = self
            .blocks
            .iter()
            .position(|b| b.id == block_id)
            .ok_or_else(|| ScheduleError::UnknownBlock(block_id.to_string()))?;

        let stored = &self.blocks[index];
        let candidate = Block {
            id: stored.id.clone(),
            day: patch.day.unwrap_or(stored.day),
            start: patch.start.clone().unwrap_or_else(|| stored.start.clone()),
            end: patch.end.clone().unwrap_or_else(|| stored.end.clone()),
            title: None,
            tag: None,
        };
        validate_block(&candidate)?;

        let others: Vec<Block> = self
            .blocks
            .iter()
            .filter(|b| b.id != block_id)
            .cloned()
            .collect();
        let conflicts = find_conflicts(&candidate, &others);
        if !conflicts.is_empty() {
            return Err(ScheduleError::Conflict {
                conflicts: conflicts.iter().map(ConflictingBlock::from).collect(),
            });
        }

        let block = &mut self.blocks[index];
        block.day = candidate.day;
        block.start = candidate.start;
        block.end = candidate.end;
        if let Some(title) = patch.title {
            block.title = Some(title);
        }
        if let Some(tag) = patch.tag {
            block.tag = Some(tag);
        }
        Ok(())
    }

    /// Remove the block with `block_id`.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownBlock`] if no block has that id.
    pub fn remove_block(&mut self, block_id: &str) -> Result<()> {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != block_id);
        if self.blocks.len() == before {
            return Err(ScheduleError::UnknownBlock(block_id.to_string()));
        }
        Ok(())
    }

    /// Classify `now` against this schedule's blocks.
    pub fn classify(&self, now: NaiveDateTime) -> Classification {
        classify(&self.blocks, now)
    }

    /// Clear every block reference to a deleted tag.
    pub fn detach_tag(&mut self, tag_id: &str) {
        for block in &mut self.blocks {
            if block.tag.as_deref() == Some(tag_id) {
                block.tag = None;
            }
        }
    }
}
