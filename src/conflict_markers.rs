//! The textual conflict block embedded in merged content:
//!
//! ```text
//! <<<<<<< LOCAL
//! {local text}
//! =======
//! {remote text}
//! >>>>>>> REMOTE
//! ```

use std::borrow::Cow;

use crate::{
    MergeOptions, Side,
    tokenizer::{join_lines, line_tokenizer},
};

pub const START_MARKER: &str = "<<<<<<<";
pub const SEPARATOR_MARKER: &str = "=======";
pub const END_MARKER: &str = ">>>>>>>";

/// A marker block found in a text. Line numbers are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictBlock {
    pub start_line: usize,
    pub separator_line: usize,
    pub end_line: usize,
    /// Lines between the start marker and the separator, joined by `\n`.
    pub local: String,
    /// Lines between the separator and the end marker, joined by `\n`.
    pub remote: String,
}

/// The lines of a marker block holding `local` then `remote`.
pub(crate) fn conflict_block<'a>(
    local: &[&'a str],
    remote: &[&'a str],
    options: &MergeOptions,
) -> Vec<Cow<'a, str>> {
    let mut block = Vec::with_capacity(local.len() + remote.len() + 3);

    block.push(labelled(START_MARKER, &options.local_label));
    block.extend(local.iter().map(|line| Cow::Borrowed(*line)));
    block.push(Cow::Borrowed(SEPARATOR_MARKER));
    block.extend(remote.iter().map(|line| Cow::Borrowed(*line)));
    block.push(labelled(END_MARKER, &options.remote_label));

    block
}

fn labelled(marker: &'static str, label: &str) -> Cow<'static, str> {
    if label.is_empty() {
        Cow::Borrowed(marker)
    } else {
        Cow::Owned(format!("{marker} {label}"))
    }
}

/// Locate every complete marker block in `text`. Unterminated blocks are
/// ignored.
#[must_use]
pub fn find_conflict_blocks(text: &str) -> Vec<ConflictBlock> {
    let tokens = line_tokenizer(text);
    let lines = tokens.lines();

    let mut blocks = Vec::new();
    let mut start = None;
    let mut separator = None;

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with(START_MARKER) {
            start = Some(i);
            separator = None;
        } else if *line == SEPARATOR_MARKER && start.is_some() && separator.is_none() {
            separator = Some(i);
        } else if line.starts_with(END_MARKER) {
            if let (Some(start_line), Some(separator_line)) = (start, separator) {
                blocks.push(ConflictBlock {
                    start_line,
                    separator_line,
                    end_line: i,
                    local: lines[start_line + 1..separator_line].join("\n"),
                    remote: lines[separator_line + 1..i].join("\n"),
                });
            }
            start = None;
            separator = None;
        }
    }

    blocks
}

#[must_use]
pub fn has_conflict_markers(text: &str) -> bool { !find_conflict_blocks(text).is_empty() }

/// Replace every marker block in `text` with the lines of one side.
///
/// ```
/// use chart_merge::{Side, conflict_markers::resolve_all};
///
/// let text = "C\n<<<<<<< LOCAL\nG\n=======\nD\n>>>>>>> REMOTE\nF\n";
/// assert_eq!(resolve_all(text, Side::Remote), "C\nD\nF\n");
/// ```
#[must_use]
pub fn resolve_all(text: &str, side: Side) -> String {
    let tokens = line_tokenizer(text);
    let lines = tokens.lines();

    let mut resolved: Vec<&str> = Vec::with_capacity(lines.len());
    let mut copied_until = 0;

    for block in find_conflict_blocks(text) {
        resolved.extend(&lines[copied_until..block.start_line]);
        resolved.extend(match side {
            Side::Local => &lines[block.start_line + 1..block.separator_line],
            Side::Remote => &lines[block.separator_line + 1..block.end_line],
        });
        copied_until = block.end_line + 1;
    }
    resolved.extend(&lines[copied_until..]);

    join_lines(&resolved, tokens.has_trailing_newline())
}
