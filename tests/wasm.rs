#![cfg(feature = "wasm")]

use chart_merge::{Side, wasm::*};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_diff_text() {
    let lines = diff_text("C\nG\nAm\n", "C\nF\nAm\nE\n");

    let kinds = lines.iter().map(JsDiffLine::kind).collect::<Vec<_>>();
    assert_eq!(kinds, ["unchanged", "modified", "unchanged", "added"]);
    assert_eq!(lines[1].content(), "F");
    assert_eq!(lines[1].origin_position(), Some(1));
}

#[wasm_bindgen_test(unsupported = test)]
fn test_merge_text() {
    let result = merge_text(Some("C\nG\n".to_owned()), "C\nG\nAm\n", "D\nG\n");

    assert_eq!(result.merged_text(), "D\nG\nAm\n");
    assert!(!result.has_conflicts());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_merge_text_with_conflict() {
    let result = merge_text(Some("C\n".to_owned()), "G\n", "D\n");

    assert_eq!(
        result.merged_text(),
        "<<<<<<< LOCAL\nG\n=======\nD\n>>>>>>> REMOTE\n"
    );
    assert!(has_conflict_markers(&result.merged_text()));

    let conflicts = result.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].base().as_deref(), Some("C"));
    assert_eq!(conflicts[0].local().as_deref(), Some("G"));
    assert_eq!(conflicts[0].remote().as_deref(), Some("D"));

    assert_eq!(
        resolve_conflict_markers(&result.merged_text(), Side::Remote),
        "D\n"
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_merge_text_without_base() {
    let result = merge_text(None, "same\n", "same\n");

    assert_eq!(result.merged_text(), "same\n");
    assert!(!result.has_conflicts());
}
