#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DiffLine, LineKind};

/// Ordered, classified lines of a line diff together with their tallies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
    lines: Vec<DiffLine>,
    added: usize,
    removed: usize,
    modified: usize,
}

impl DiffResult {
    pub(crate) fn new(lines: Vec<DiffLine>) -> Self {
        let count = |kind: LineKind| lines.iter().filter(|line| line.kind() == kind).count();
        let added = count(LineKind::Added);
        let removed = count(LineKind::Removed);
        let modified = count(LineKind::Modified);

        Self {
            lines,
            added,
            removed,
            modified,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[DiffLine] { &self.lines }

    #[must_use]
    pub fn added(&self) -> usize { self.added }

    #[must_use]
    pub fn removed(&self) -> usize { self.removed }

    #[must_use]
    pub fn modified(&self) -> usize { self.modified }

    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.lines.len() - self.added - self.removed - self.modified
    }

    /// True when no line was added, removed or modified.
    #[must_use]
    pub fn is_identical(&self) -> bool { self.added + self.removed + self.modified == 0 }
}
