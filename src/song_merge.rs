use log::debug;

use crate::{
    ConflictField, FieldName, FieldValue, MergeOptions, MergeRule, SongMergeResult, SongRecord,
    content_merge::merge_content_with_options,
};

/// Merge two divergent snapshots of a song field by field.
///
/// Scalar fields follow the classic three-way rule: whichever side differs
/// from `base` wins, and if both do (or there is no base) the field is
/// escalated with the local value kept as a placeholder. A value that only
/// one side has is adopted when the base cannot tell who changed what.
/// `content` is merged line by line and escalated only if that merge
/// conflicts. `tags` are always merged: a tag survives unless both sides
/// dropped it.
///
/// ```
/// use chart_merge::{FieldName, SongRecord, merge_songs};
///
/// let local = SongRecord::new("Amazing Grace", "G C G");
/// let remote = SongRecord::new("Amazing Grace (Live)", "G C G");
///
/// let result = merge_songs(&local, &remote, None);
/// assert_eq!(result.merged.title, "Amazing Grace");
/// assert!(result.conflict(FieldName::Title).is_some());
/// ```
#[must_use]
pub fn merge_songs(
    local: &SongRecord,
    remote: &SongRecord,
    base: Option<&SongRecord>,
) -> SongMergeResult {
    merge_songs_with_options(local, remote, base, &MergeOptions::default())
}

/// Same as [`merge_songs`] with explicit options for the content merge.
#[must_use]
pub fn merge_songs_with_options(
    local: &SongRecord,
    remote: &SongRecord,
    base: Option<&SongRecord>,
    options: &MergeOptions,
) -> SongMergeResult {
    let mut merger = FieldMerger {
        local,
        remote,
        base,
        result: SongMergeResult {
            merged: local.clone(),
            manual_resolution_needed: Vec::new(),
            auto_merged_fields: Vec::new(),
        },
    };

    for field in FieldName::ALL {
        match field.rule() {
            MergeRule::Scalar => merger.merge_scalar(field),
            MergeRule::Content => merger.merge_content(options),
            MergeRule::TagSet => merger.merge_tags(),
        }
    }

    debug!(
        "merged song '{}': {} field(s) auto-merged, {} need manual resolution",
        merger.result.merged.title,
        merger.result.auto_merged_fields.len(),
        merger.result.manual_resolution_needed.len()
    );

    merger.result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarDecision {
    Same,
    TakeLocal,
    TakeRemote,
    Conflict,
}

fn decide(local: &FieldValue, remote: &FieldValue, base: Option<&FieldValue>) -> ScalarDecision {
    if local == remote {
        return ScalarDecision::Same;
    }

    if let Some(base) = base {
        if local == base {
            return ScalarDecision::TakeRemote;
        }
        if remote == base {
            return ScalarDecision::TakeLocal;
        }
    }

    match (local, remote) {
        (_, FieldValue::Empty) => ScalarDecision::TakeLocal,
        (FieldValue::Empty, _) => ScalarDecision::TakeRemote,
        _ => ScalarDecision::Conflict,
    }
}

#[derive(Debug)]
struct FieldMerger<'r> {
    local: &'r SongRecord,
    remote: &'r SongRecord,
    base: Option<&'r SongRecord>,
    result: SongMergeResult,
}

impl FieldMerger<'_> {
    fn merge_scalar(&mut self, field: FieldName) {
        let base = self.base.map(|base| base.value(field));
        let decision = decide(
            &self.local.value(field),
            &self.remote.value(field),
            base.as_ref(),
        );
        debug!("{field}: {decision:?}");

        match decision {
            ScalarDecision::Same => {}
            ScalarDecision::TakeLocal => self.result.auto_merged_fields.push(field),
            ScalarDecision::TakeRemote => {
                self.result.merged.copy_field(self.remote, field);
                self.result.auto_merged_fields.push(field);
            }
            ScalarDecision::Conflict => {
                if let Some(conflict) = ConflictField::between(field, self.local, self.remote) {
                    self.result.manual_resolution_needed.push(conflict);
                }
            }
        }
    }

    fn merge_content(&mut self, options: &MergeOptions) {
        if self.local.content == self.remote.content {
            return;
        }

        let merged = merge_content_with_options(
            self.base.map(|base| base.content.as_str()),
            &self.local.content,
            &self.remote.content,
            options,
        );

        if merged.has_conflicts() {
            debug!("content: {} conflicting region(s)", merged.conflicts().len());
            let conflicts = merged.conflicts().to_vec();
            self.result
                .manual_resolution_needed
                .push(ConflictField::Content {
                    local: self.local.content.clone(),
                    remote: self.remote.content.clone(),
                    merged: merged.into_merged_text(),
                    conflicts,
                });
        } else {
            debug!("content: merged cleanly");
            self.result.merged.content = merged.into_merged_text();
            self.result.auto_merged_fields.push(FieldName::Content);
        }
    }

    fn merge_tags(&mut self) {
        if self.local.tags == self.remote.tags {
            return;
        }

        // A tag only disappears when both sides dropped it, and then it is in
        // neither set to begin with.
        self.result.merged.tags = self.local.tags.union(&self.remote.tags).cloned().collect();
        self.result.auto_merged_fields.push(FieldName::Tags);
    }
}
