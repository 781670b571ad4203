//! The range table: an ordered, gap-free partition of the action space.
//!
//! ## Invariants
//!
//! Checked once when the table is built; a table that fails any of them is
//! never handed out.
//!
//! - `ranges[0].start == 0`
//! - `ranges[i].end == ranges[i + 1].start`
//! - every range is non-empty
//! - the last `end` is the total action count

use serde::{Deserialize, Serialize};

use crate::core::CodecError;

use super::block::{ActionBlock, STANDARD_LAYOUT};

/// A half-open span `[start, end)` of global action indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRange {
    pub start: usize,
    pub end: usize,
    pub block: ActionBlock,
}

impl ActionRange {
    /// Number of indices in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Validated, immutable range table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeTable {
    ranges: Vec<ActionRange>,
    total: usize,
}

impl RangeTable {
    /// Build the table for the standard Sorry! layout.
    pub fn standard() -> Result<Self, CodecError> {
        Self::from_blocks(&STANDARD_LAYOUT)
    }

    /// Lay blocks out back to back starting at index 0.
    pub fn from_blocks(blocks: &[ActionBlock]) -> Result<Self, CodecError> {
        let mut ranges: Vec<ActionRange> = Vec::with_capacity(blocks.len());
        for &block in blocks {
            let start = ranges.last().map_or(0, |r| r.end);
            let end = block
                .checked_len()
                .and_then(|len| start.checked_add(len))
                .ok_or_else(|| unplayable(block))?;
            ranges.push(ActionRange { start, end, block });
        }
        Self::from_ranges(ranges)
    }

    /// Adopt explicit ranges after checking the partition invariants.
    pub fn from_ranges(ranges: Vec<ActionRange>) -> Result<Self, CodecError> {
        let first = ranges
            .first()
            .ok_or_else(|| CodecError::RangeTableInvariant("table has no ranges".to_string()))?;
        if first.start != 0 {
            return Err(CodecError::RangeTableInvariant(format!(
                "first range {} starts at {}, not 0",
                first.block, first.start
            )));
        }

        for range in &ranges {
            let Some(block_len) = range.block.checked_len() else {
                return Err(unplayable(range.block));
            };
            if range.end <= range.start {
                return Err(CodecError::RangeTableInvariant(format!(
                    "range {} [{}, {}) is empty",
                    range.block, range.start, range.end
                )));
            }
            if range.len() != block_len {
                return Err(CodecError::RangeTableInvariant(format!(
                    "range {} spans {} indices but the block decodes {}",
                    range.block,
                    range.len(),
                    block_len
                )));
            }
        }

        for pair in ranges.windows(2) {
            if pair[0].end != pair[1].start {
                return Err(CodecError::RangeTableInvariant(format!(
                    "range {} ends at {} but {} starts at {}",
                    pair[0].block, pair[0].end, pair[1].block, pair[1].start
                )));
            }
        }

        let total = ranges.last().map_or(0, |r| r.end);
        Ok(Self { ranges, total })
    }

    /// Total number of action indices.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn ranges(&self) -> &[ActionRange] {
        &self.ranges
    }

    /// Find the range containing `index` and the local index inside it.
    #[must_use]
    pub fn locate(&self, index: usize) -> Option<(&ActionRange, usize)> {
        if index >= self.total {
            return None;
        }
        // Ranges are sorted and contiguous: the first range ending past
        // `index` contains it.
        let pos = self.ranges.partition_point(|r| r.end <= index);
        let range = self.ranges.get(pos)?;
        debug_assert!(range.contains(index));
        Some((range, index - range.start))
    }
}

fn unplayable(block: ActionBlock) -> CodecError {
    CodecError::RangeTableInvariant(format!("block {block} has no playable step count"))
}
