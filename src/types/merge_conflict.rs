use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous region that local and remote changed in different ways.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConflict {
    /// First line of the region in the base text, or in the local text when
    /// the merge had no base.
    pub position: usize,
    /// The region's base lines joined by `\n`, `None` if base had no lines
    /// there.
    pub base: Option<String>,
    pub local: Option<String>,
    pub remote: Option<String>,
    /// Lines of the merged text covered by the marker block, markers
    /// included.
    pub merged_lines: Range<usize>,
}
