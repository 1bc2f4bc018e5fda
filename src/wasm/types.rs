use wasm_bindgen::prelude::*;

use crate::{DiffLine, LineKind, MergeConflict, MergeResult};

/// Wrapper type to expose `DiffLine` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsDiffLine {
    position: usize,
    content: String,
    kind: LineKind,
    origin_position: Option<usize>,
}

#[wasm_bindgen]
impl JsDiffLine {
    #[must_use]
    pub fn position(&self) -> usize { self.position }

    #[must_use]
    pub fn content(&self) -> String { self.content.clone() }

    /// One of `unchanged`, `added`, `removed` or `modified`.
    #[must_use]
    pub fn kind(&self) -> String {
        match self.kind {
            LineKind::Unchanged => "unchanged",
            LineKind::Added => "added",
            LineKind::Removed => "removed",
            LineKind::Modified => "modified",
        }
        .to_owned()
    }

    #[wasm_bindgen(js_name = originPosition)]
    #[must_use]
    pub fn origin_position(&self) -> Option<usize> { self.origin_position }
}

impl From<&DiffLine> for JsDiffLine {
    fn from(line: &DiffLine) -> Self {
        JsDiffLine {
            position: line.position(),
            content: line.content().to_owned(),
            kind: line.kind(),
            origin_position: line.origin_position(),
        }
    }
}

/// Wrapper type to expose `MergeConflict` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsMergeConflict {
    position: usize,
    base: Option<String>,
    local: Option<String>,
    remote: Option<String>,
}

#[wasm_bindgen]
impl JsMergeConflict {
    #[must_use]
    pub fn position(&self) -> usize { self.position }

    #[must_use]
    pub fn base(&self) -> Option<String> { self.base.clone() }

    #[must_use]
    pub fn local(&self) -> Option<String> { self.local.clone() }

    #[must_use]
    pub fn remote(&self) -> Option<String> { self.remote.clone() }
}

impl From<MergeConflict> for JsMergeConflict {
    fn from(conflict: MergeConflict) -> Self {
        JsMergeConflict {
            position: conflict.position,
            base: conflict.base,
            local: conflict.local,
            remote: conflict.remote,
        }
    }
}

/// Wrapper type to expose `MergeResult` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsMergeResult {
    merged_text: String,
    conflicts: Vec<JsMergeConflict>,
}

#[wasm_bindgen]
impl JsMergeResult {
    #[wasm_bindgen(js_name = mergedText)]
    #[must_use]
    pub fn merged_text(&self) -> String { self.merged_text.clone() }

    #[must_use]
    pub fn conflicts(&self) -> Vec<JsMergeConflict> { self.conflicts.clone() }

    #[wasm_bindgen(js_name = hasConflicts)]
    #[must_use]
    pub fn has_conflicts(&self) -> bool { !self.conflicts.is_empty() }
}

impl From<MergeResult> for JsMergeResult {
    fn from(result: MergeResult) -> Self {
        let conflicts = result.conflicts().to_vec();

        JsMergeResult {
            merged_text: result.into_merged_text(),
            conflicts: conflicts.into_iter().map(JsMergeConflict::from).collect(),
        }
    }
}
