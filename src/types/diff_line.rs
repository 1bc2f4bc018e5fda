#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a line changed between the original and the modified sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    /// Replaces the original line at `origin_position`.
    Modified,
}

/// One classified line of a [`crate::DiffResult`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    position: usize,
    content: String,
    kind: LineKind,
    origin_position: Option<usize>,
}

impl DiffLine {
    pub(crate) fn new(
        position: usize,
        content: &str,
        kind: LineKind,
        origin_position: Option<usize>,
    ) -> Self {
        Self {
            position,
            content: content.to_owned(),
            kind,
            origin_position,
        }
    }

    /// Index of the line in the sequence it belongs to: the original one for
    /// removed lines, the modified one for everything else.
    #[must_use]
    pub fn position(&self) -> usize { self.position }

    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    #[must_use]
    pub fn kind(&self) -> LineKind { self.kind }

    /// Index of the corresponding line in the original sequence. `None` for
    /// added lines.
    #[must_use]
    pub fn origin_position(&self) -> Option<usize> { self.origin_position }
}
