use log::trace;

use crate::{
    DiffAlgorithm, DiffLine, DiffResult, LineKind,
    diffs::{self, raw_operation::RawOperation},
    tokenizer::line_tokenizer,
};

/// Classify every line of `original` and `modified` as unchanged, added,
/// removed or modified, aligning them on their longest common subsequence.
///
/// Runs of removed and added lines found at the same place are reported as
/// `Modified` pairs when both runs have the same length.
///
/// ```
/// use chart_merge::{LineKind, diff_lines};
///
/// let diff = diff_lines(&["C", "G", "Am", "F"], &["C", "F", "Am", "F"]);
/// assert_eq!(diff.modified(), 1);
/// assert_eq!(diff.lines()[1].kind(), LineKind::Modified);
/// assert_eq!(diff.lines()[1].content(), "F");
/// ```
#[must_use]
pub fn diff_lines<S>(original: &[S], modified: &[S]) -> DiffResult
where
    S: AsRef<str> + PartialEq,
{
    diff_lines_with_algorithm(original, modified, DiffAlgorithm::default())
}

/// Same as [`diff_lines`] but aligns the lines with the given algorithm.
#[must_use]
pub fn diff_lines_with_algorithm<S>(
    original: &[S],
    modified: &[S],
    algorithm: DiffAlgorithm,
) -> DiffResult
where
    S: AsRef<str> + PartialEq,
{
    let operations = diffs::diff(original, modified, algorithm);

    // Sequences without a single common line are reported as a full removal
    // followed by a full insertion, never as modifications.
    let mut hunk = Hunk {
        pair_modified: operations.iter().any(RawOperation::is_equal),
        ..Hunk::default()
    };
    let mut lines = Vec::with_capacity(operations.len());

    for operation in operations {
        match operation {
            RawOperation::Equal {
                old_index,
                new_index,
            } => {
                hunk.flush(original, modified, &mut lines);
                lines.push(DiffLine::new(
                    new_index,
                    modified[new_index].as_ref(),
                    LineKind::Unchanged,
                    Some(old_index),
                ));
            }
            RawOperation::Delete { old_index } => hunk.removed.push(old_index),
            RawOperation::Insert { new_index } => hunk.added.push(new_index),
        }
    }
    hunk.flush(original, modified, &mut lines);

    let result = DiffResult::new(lines);
    trace!(
        "diffed {} against {} lines: {} added, {} removed, {} modified",
        original.len(),
        modified.len(),
        result.added(),
        result.removed(),
        result.modified()
    );

    result
}

/// Diff two texts line by line. See [`crate::tokenizer::line_tokenizer`] for
/// how the texts are split.
#[must_use]
pub fn diff_text(original: &str, modified: &str) -> DiffResult {
    diff_lines(
        line_tokenizer(original).lines(),
        line_tokenizer(modified).lines(),
    )
}

/// Unmatched lines collected between two unchanged lines.
#[derive(Debug, Default)]
struct Hunk {
    removed: Vec<usize>,
    added: Vec<usize>,
    pair_modified: bool,
}

impl Hunk {
    fn flush<S: AsRef<str>>(&mut self, original: &[S], modified: &[S], lines: &mut Vec<DiffLine>) {
        if self.pair_modified && self.removed.len() == self.added.len() {
            lines.extend(self.removed.iter().zip(&self.added).map(|(&old, &new)| {
                DiffLine::new(new, modified[new].as_ref(), LineKind::Modified, Some(old))
            }));
        } else {
            lines.extend(self.removed.iter().map(|&old| {
                DiffLine::new(old, original[old].as_ref(), LineKind::Removed, Some(old))
            }));
            lines.extend(
                self.added
                    .iter()
                    .map(|&new| DiffLine::new(new, modified[new].as_ref(), LineKind::Added, None)),
            );
        }

        self.removed.clear();
        self.added.clear();
    }
}
