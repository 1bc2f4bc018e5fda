use std::{collections::BTreeSet, thread};

use chart_merge::{
    ConflictField, ConflictState, FieldChoice, FieldChoices, FieldName, LineKind, SongRecord,
    apply_resolutions, diff_lines, merge_content, merge_songs,
};
use pretty_assertions::assert_eq;

fn tags(values: &[&str]) -> BTreeSet<String> { values.iter().map(|&tag| tag.to_owned()).collect() }

fn amazing_grace() -> SongRecord {
    SongRecord {
        artist: Some("John Newton".to_owned()),
        key: Some("G".to_owned()),
        tempo: Some(72),
        time_signature: Some("3/4".to_owned()),
        tags: tags(&["hymn", "worship"]),
        notes: Some("Slow first verse".to_owned()),
        ..SongRecord::new("Amazing Grace", "[Verse]\nG C G\nG D\n")
    }
}

#[test]
fn test_merging_base_with_itself_changes_nothing() {
    let base = amazing_grace();

    let result = merge_songs(&base, &base, Some(&base));

    assert_eq!(result.merged, base);
    assert!(result.manual_resolution_needed.is_empty());
    assert!(result.auto_merged_fields.is_empty());
    assert_eq!(
        result.state(&FieldChoices::new()),
        ConflictState::NoConflict
    );
}

#[test]
fn test_equal_sides_merge_cleanly_whatever_the_base() {
    let base = amazing_grace();
    let edited = SongRecord {
        content: "[Verse]\nG C G\nG D7\n".to_owned(),
        ..base.clone()
    };

    let content = merge_content(Some(base.content.as_str()), &edited.content, &edited.content);
    assert!(!content.has_conflicts());
    assert_eq!(content.merged_text(), edited.content);

    let result = merge_songs(&edited, &edited, Some(&base));
    assert_eq!(result.merged, edited);
    assert!(!result.needs_manual_resolution());
}

#[test]
fn test_diff_of_identical_and_disjoint_lines() {
    let chart = ["C", "G", "Am", "F"];
    let identical = diff_lines(&chart, &chart);
    assert_eq!((identical.added(), identical.removed(), identical.modified()), (0, 0, 0));
    assert!(
        identical
            .lines()
            .iter()
            .all(|line| line.kind() == LineKind::Unchanged)
    );

    let disjoint = diff_lines(&chart, &["D", "A", "Bm"]);
    assert_eq!((disjoint.added(), disjoint.removed(), disjoint.modified()), (3, 4, 0));
}

#[test]
fn test_remote_content_edit_is_auto_merged() {
    let base = SongRecord::new("Song", "C\nG\nAm\nF");
    let remote = SongRecord::new("Song", "C\nF\nAm\nF");

    let result = merge_songs(&base, &remote, Some(&base));

    assert_eq!(result.merged.content, "C\nF\nAm\nF");
    assert_eq!(result.auto_merged_fields, vec![FieldName::Content]);
    assert!(!result.needs_manual_resolution());
}

#[test]
fn test_diverged_title_without_base_needs_a_decision() {
    let local = SongRecord::new("Amazing Grace", "");
    let remote = SongRecord::new("Amazing Grace (Live)", "");

    let result = merge_songs(&local, &remote, None);

    assert_eq!(result.merged.title, "Amazing Grace");
    assert_eq!(result.manual_resolution_needed, vec![ConflictField::Title {
        local: "Amazing Grace".to_owned(),
        remote: "Amazing Grace (Live)".to_owned(),
    }]);
    assert_eq!(
        result.state(&FieldChoices::new()),
        ConflictState::PendingResolution
    );
}

#[test]
fn test_tags_added_on_both_sides_are_kept() {
    let base = SongRecord {
        tags: tags(&["praise"]),
        ..SongRecord::default()
    };
    let local = SongRecord {
        tags: tags(&["praise", "fast"]),
        ..SongRecord::default()
    };
    let remote = SongRecord {
        tags: tags(&["praise", "slow"]),
        ..SongRecord::default()
    };

    let result = merge_songs(&local, &remote, Some(&base));

    assert_eq!(result.merged.tags, tags(&["praise", "fast", "slow"]));
    assert!(result.is_auto_merged(FieldName::Tags));
}

#[test]
fn test_tag_removed_on_both_sides_is_dropped() {
    let base = SongRecord {
        tags: tags(&["praise", "worship"]),
        ..SongRecord::default()
    };
    let edited = SongRecord {
        tags: tags(&["praise"]),
        ..SongRecord::default()
    };

    let result = merge_songs(&edited, &edited, Some(&base));

    assert_eq!(result.merged.tags, tags(&["praise"]));
}

#[test]
fn test_tags_removed_on_both_diverged_sides_are_dropped() {
    let base = SongRecord {
        tags: tags(&["praise", "worship", "old"]),
        ..SongRecord::default()
    };
    let local = SongRecord {
        tags: tags(&["praise", "fast"]),
        ..SongRecord::default()
    };
    let remote = SongRecord {
        tags: tags(&["praise", "slow"]),
        ..SongRecord::default()
    };

    let result = merge_songs(&local, &remote, Some(&base));

    assert_eq!(result.merged.tags, tags(&["praise", "fast", "slow"]));
    assert_eq!(result.auto_merged_fields, vec![FieldName::Tags]);
    assert!(!result.needs_manual_resolution());
}

#[test]
fn test_tag_removed_on_one_side_is_kept() {
    let base = SongRecord {
        tags: tags(&["praise", "worship"]),
        ..SongRecord::default()
    };
    let local = SongRecord {
        tags: tags(&["praise"]),
        ..SongRecord::default()
    };
    let remote = SongRecord {
        tags: tags(&["praise", "worship", "slow"]),
        ..SongRecord::default()
    };

    let result = merge_songs(&local, &remote, Some(&base));

    assert_eq!(result.merged.tags, tags(&["praise", "worship", "slow"]));
    assert!(result.is_auto_merged(FieldName::Tags));
}

#[test]
fn test_custom_title_overrides_both_sides() {
    let local = SongRecord::new("Amazing Grace", "");
    let remote = SongRecord::new("Amazing Grace (Live)", "");
    let result = merge_songs(&local, &remote, None);

    let choices = FieldChoices::from([(FieldName::Title, FieldChoice::custom("New Arrangement"))]);
    assert_eq!(result.state(&choices), ConflictState::Resolved);

    let resolved = apply_resolutions(&result, &remote, &choices).unwrap();
    assert_eq!(resolved.title, "New Arrangement");
}

#[test]
fn test_full_resolution_flow() {
    let base = amazing_grace();
    let local = SongRecord {
        tempo: Some(80),
        content: "[Verse]\nG C/G G\nG D\n".to_owned(),
        tags: tags(&["hymn", "worship", "slow"]),
        ..base.clone()
    };
    let remote = SongRecord {
        tempo: Some(76),
        key: Some("A".to_owned()),
        content: "[Verse]\nG Cmaj7 G\nG D\n".to_owned(),
        tags: tags(&["hymn"]),
        ..base.clone()
    };

    let result = merge_songs(&local, &remote, Some(&base));

    assert_eq!(result.auto_merged_fields, vec![FieldName::Key, FieldName::Tags]);
    assert_eq!(result.merged.key.as_deref(), Some("A"));
    assert_eq!(result.merged.tags, tags(&["hymn", "worship", "slow"]));

    let Some(ConflictField::Content {
        merged, conflicts, ..
    }) = result.conflict(FieldName::Content)
    else {
        panic!("content should need a decision");
    };
    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        merged,
        "[Verse]\n<<<<<<< LOCAL\nG C/G G\n=======\nG Cmaj7 G\n>>>>>>> REMOTE\nG D\n"
    );

    let choices = FieldChoices::from([
        (FieldName::Tempo, FieldChoice::Remote),
        (FieldName::Content, FieldChoice::Local),
    ]);
    assert_eq!(result.state(&choices), ConflictState::Resolved);

    let resolved = apply_resolutions(&result, &remote, &choices).unwrap();
    assert_eq!(resolved, SongRecord {
        tempo: Some(76),
        key: Some("A".to_owned()),
        content: local.content.clone(),
        tags: tags(&["hymn", "worship", "slow"]),
        ..base
    });
}

#[test]
fn test_independent_documents_merge_in_parallel() {
    let base = amazing_grace();
    let pairs = (0..8)
        .map(|i| {
            let local = SongRecord {
                tempo: Some(60 + i),
                ..base.clone()
            };
            let remote = SongRecord {
                notes: Some(format!("Take {i}")),
                ..base.clone()
            };
            (local, remote)
        })
        .collect::<Vec<_>>();

    let base = &base;
    let results = thread::scope(|scope| {
        let handles = pairs
            .iter()
            .map(|(local, remote)| scope.spawn(move || merge_songs(local, remote, Some(base))))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    for (i, result) in (0..).zip(&results) {
        assert!(!result.needs_manual_resolution());
        assert_eq!(result.merged.tempo, Some(60 + i));
        assert_eq!(result.merged.notes, Some(format!("Take {i}")));
    }
}
