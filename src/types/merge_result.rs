use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MergeConflict;

/// Where a run of merged lines came from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Neither side touched these lines.
    Unchanged,
    /// Taken from local, remote left the region as it was in base.
    Local,
    /// Taken from remote, local left the region as it was in base.
    Remote,
    /// Both sides made the same change.
    Both,
    /// A marker block.
    Conflict,
}

/// A run of merged lines sharing an [`Origin`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSpan {
    pub origin: Origin,
    pub lines: Range<usize>,
}

/// Outcome of a three-way text merge.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    merged_text: String,
    conflicts: Vec<MergeConflict>,
    spans: Vec<MergedSpan>,
}

impl MergeResult {
    pub(crate) fn new(
        merged_text: String,
        conflicts: Vec<MergeConflict>,
        spans: Vec<MergedSpan>,
    ) -> Self {
        Self {
            merged_text,
            conflicts,
            spans,
        }
    }

    /// The merged text. Contains conflict markers if [`Self::has_conflicts`].
    #[must_use]
    pub fn merged_text(&self) -> &str { &self.merged_text }

    #[must_use]
    pub fn into_merged_text(self) -> String { self.merged_text }

    #[must_use]
    pub fn conflicts(&self) -> &[MergeConflict] { &self.conflicts }

    #[must_use]
    pub fn has_conflicts(&self) -> bool { !self.conflicts.is_empty() }

    #[must_use]
    pub fn spans(&self) -> &[MergedSpan] { &self.spans }

    /// Base positions of the conflicting regions.
    #[must_use]
    pub fn conflict_positions(&self) -> Vec<usize> {
        self.conflicts.iter().map(|conflict| conflict.position).collect()
    }
}
