use std::{borrow::Cow, ops::Range};

use log::debug;

use crate::{
    MergeConflict, MergeOptions, MergeResult, MergedSpan, Origin,
    conflict_markers::conflict_block,
    diffs::{
        self,
        raw_operation::{RawOperation, matching_indices},
    },
    tokenizer::{Lines, join_lines, line_tokenizer},
};

/// Merge two concurrent edits of a text line by line.
///
/// With a `base`, both sides are aligned against it and every region is
/// taken from whichever side changed it. Regions both sides changed in
/// different ways become a single marker block and a [`MergeConflict`].
/// Without a `base` there is nothing to tell which side changed what, so
/// every region where `local` and `remote` differ is a conflict.
///
/// ```
/// use chart_merge::merge_content;
///
/// let base = "[Verse]\nC G\nAm F\n[Chorus]\nF C\n";
/// let local = "[Verse]\nC G/B\nAm F\n[Chorus]\nF C\n";
/// let remote = "[Verse]\nC G\nAm F\n[Chorus]\nF C G\n";
///
/// let merged = merge_content(Some(base), local, remote);
/// assert!(!merged.has_conflicts());
/// assert_eq!(merged.merged_text(), "[Verse]\nC G/B\nAm F\n[Chorus]\nF C G\n");
/// ```
#[must_use]
pub fn merge_content(base: Option<&str>, local: &str, remote: &str) -> MergeResult {
    merge_content_with_options(base, local, remote, &MergeOptions::default())
}

/// Same as [`merge_content`] with explicit options.
#[must_use]
pub fn merge_content_with_options(
    base: Option<&str>,
    local: &str,
    remote: &str,
    options: &MergeOptions,
) -> MergeResult {
    let local_lines = line_tokenizer(local);
    let remote_lines = line_tokenizer(remote);
    let base_lines = base.map(line_tokenizer);

    if local == remote {
        debug!("local and remote content are identical");
        return take_side(base_lines.as_ref(), &local_lines, Origin::Both, options);
    }

    let Some(base_lines) = base_lines else {
        debug!("no common base, every difference is a conflict");
        return merge_without_base(&local_lines, &remote_lines, options);
    };

    if Some(local) == base {
        debug!("only remote content changed");
        return take_side(Some(&base_lines), &remote_lines, Origin::Remote, options);
    }
    if Some(remote) == base {
        debug!("only local content changed");
        return take_side(Some(&base_lines), &local_lines, Origin::Local, options);
    }

    let result = merge_with_base(&base_lines, &local_lines, &remote_lines, options);
    debug!(
        "three-way content merge produced {} conflict(s) in {} span(s)",
        result.conflicts().len(),
        result.spans().len()
    );

    result
}

/// A clean merge whose lines are exactly those of one of the inputs.
fn take_side(
    base: Option<&Lines<'_>>,
    side: &Lines<'_>,
    origin: Origin,
    options: &MergeOptions,
) -> MergeResult {
    let mut spans = Spans::default();

    match base {
        Some(base) => {
            for operation in diffs::diff(base.lines(), side.lines(), options.diff_algorithm) {
                match operation {
                    RawOperation::Equal { new_index, .. } => {
                        spans.push(Origin::Unchanged, new_index..new_index + 1);
                    }
                    RawOperation::Insert { new_index } => {
                        spans.push(origin, new_index..new_index + 1);
                    }
                    RawOperation::Delete { .. } => {}
                }
            }
        }
        None => spans.push(Origin::Unchanged, 0..side.len()),
    }

    MergeResult::new(
        join_lines(side.lines(), side.has_trailing_newline()),
        Vec::new(),
        spans.0,
    )
}

/// diff3: walk base, emitting lines that are matched by both sides as they
/// are and deciding every region in between on its own.
fn merge_with_base<'a>(
    base: &Lines<'a>,
    local: &Lines<'a>,
    remote: &Lines<'a>,
    options: &MergeOptions,
) -> MergeResult {
    let (b, l, r) = (base.lines(), local.lines(), remote.lines());

    let local_matches = matching_indices(&diffs::diff(b, l, options.diff_algorithm), b.len());
    let remote_matches = matching_indices(&diffs::diff(b, r, options.diff_algorithm), b.len());

    let mut output = MergedOutput::new(options);
    let (mut bi, mut li, mut ri) = (0, 0, 0);

    loop {
        while bi < b.len() && local_matches[bi] == Some(li) && remote_matches[bi] == Some(ri) {
            output.push(Origin::Unchanged, &b[bi..=bi]);
            bi += 1;
            li += 1;
            ri += 1;
        }

        if bi == b.len() && li == l.len() && ri == r.len() {
            break;
        }

        // The next base line both sides kept ends the unstable region.
        let (b_end, l_end, r_end) = (bi..b.len())
            .find_map(|i| Some((i, local_matches[i]?, remote_matches[i]?)))
            .unwrap_or((b.len(), l.len(), r.len()));

        let base_chunk = &b[bi..b_end];
        let local_chunk = &l[li..l_end];
        let remote_chunk = &r[ri..r_end];

        match (local_chunk != base_chunk, remote_chunk != base_chunk) {
            (false, false) => output.push(Origin::Unchanged, base_chunk),
            (true, false) => output.push(Origin::Local, local_chunk),
            (false, true) => output.push(Origin::Remote, remote_chunk),
            (true, true) if local_chunk == remote_chunk => output.push(Origin::Both, local_chunk),
            (true, true) => output.push_conflict(bi, base_chunk, local_chunk, remote_chunk),
        }

        (bi, li, ri) = (b_end, l_end, r_end);
    }

    let trailing_newline = match base.has_trailing_newline() {
        base_newline if local.has_trailing_newline() == base_newline => {
            remote.has_trailing_newline()
        }
        _ => local.has_trailing_newline(),
    };

    output.finish(trailing_newline)
}

/// Two-way fallback: lines common to both sides are kept, every hunk
/// between them is a conflict.
fn merge_without_base<'a>(
    local: &Lines<'a>,
    remote: &Lines<'a>,
    options: &MergeOptions,
) -> MergeResult {
    let (l, r) = (local.lines(), remote.lines());

    let mut output = MergedOutput::new(options);
    let (mut li, mut ri) = (0, 0);

    for operation in diffs::diff(l, r, options.diff_algorithm) {
        if let RawOperation::Equal {
            old_index,
            new_index,
        } = operation
        {
            if li < old_index || ri < new_index {
                output.push_conflict(li, &[], &l[li..old_index], &r[ri..new_index]);
            }
            output.push(Origin::Unchanged, &l[old_index..=old_index]);
            (li, ri) = (old_index + 1, new_index + 1);
        }
    }

    if li < l.len() || ri < r.len() {
        output.push_conflict(li, &[], &l[li..], &r[ri..]);
    }

    let result = output.finish(local.has_trailing_newline());
    debug!(
        "two-way content merge produced {} conflict(s)",
        result.conflicts().len()
    );

    result
}

/// Spans of merged lines, adjacent runs of the same origin joined together.
#[derive(Debug, Default)]
struct Spans(Vec<MergedSpan>);

impl Spans {
    fn push(&mut self, origin: Origin, lines: Range<usize>) {
        if lines.is_empty() {
            return;
        }

        match self.0.last_mut() {
            Some(last)
                if last.origin == origin
                    && origin != Origin::Conflict
                    && last.lines.end == lines.start =>
            {
                last.lines.end = lines.end;
            }
            _ => self.0.push(MergedSpan { origin, lines }),
        }
    }
}

#[derive(Debug)]
struct MergedOutput<'a, 'o> {
    lines: Vec<Cow<'a, str>>,
    spans: Spans,
    conflicts: Vec<MergeConflict>,
    options: &'o MergeOptions,
}

impl<'a, 'o> MergedOutput<'a, 'o> {
    fn new(options: &'o MergeOptions) -> Self {
        Self {
            lines: Vec::new(),
            spans: Spans::default(),
            conflicts: Vec::new(),
            options,
        }
    }

    fn push(&mut self, origin: Origin, lines: &[&'a str]) {
        let start = self.lines.len();
        self.lines.extend(lines.iter().map(|line| Cow::Borrowed(*line)));
        self.spans.push(origin, start..self.lines.len());
    }

    fn push_conflict(
        &mut self,
        position: usize,
        base: &[&str],
        local: &[&'a str],
        remote: &[&'a str],
    ) {
        let start = self.lines.len();
        self.lines
            .extend(conflict_block(local, remote, self.options));
        let merged_lines = start..self.lines.len();

        self.spans.push(Origin::Conflict, merged_lines.clone());
        self.conflicts.push(MergeConflict {
            position,
            base: joined(base),
            local: joined(local),
            remote: joined(remote),
            merged_lines,
        });
    }

    fn finish(self, trailing_newline: bool) -> MergeResult {
        MergeResult::new(
            join_lines(&self.lines, trailing_newline),
            self.conflicts,
            self.spans.0,
        )
    }
}

fn joined(lines: &[&str]) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
