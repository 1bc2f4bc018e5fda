//! Expose the text-level merge functionality to WebAssembly.
mod types;

use wasm_bindgen::prelude::*;

pub use self::types::{JsDiffLine, JsMergeConflict, JsMergeResult};
use crate::Side;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::diff_text` returning the classified lines.
#[wasm_bindgen(js_name = diffText)]
#[must_use]
pub fn diff_text(original: &str, modified: &str) -> Vec<JsDiffLine> {
    set_panic_hook();

    crate::diff_text(original, modified)
        .lines()
        .iter()
        .map(JsDiffLine::from)
        .collect()
}

/// WASM wrapper around `crate::merge_content`.
///
/// # Arguments
///
/// - `base`: The last synced version, if known.
/// - `local`: The version edited on this device.
/// - `remote`: The version edited elsewhere.
///
/// # Returns
///
/// The merged text, with conflict blocks where both sides changed the same
/// region, and the conflicts themselves.
#[wasm_bindgen(js_name = mergeText)]
#[must_use]
pub fn merge_text(base: Option<String>, local: &str, remote: &str) -> JsMergeResult {
    set_panic_hook();

    crate::merge_content(base.as_deref(), local, remote).into()
}

#[wasm_bindgen(js_name = hasConflictMarkers)]
#[must_use]
pub fn has_conflict_markers(text: &str) -> bool {
    set_panic_hook();

    crate::conflict_markers::has_conflict_markers(text)
}

/// Resolve every conflict block in `text` in favour of `side`.
#[wasm_bindgen(js_name = resolveConflictMarkers)]
#[must_use]
pub fn resolve_conflict_markers(text: &str, side: Side) -> String {
    set_panic_hook();

    crate::conflict_markers::resolve_all(text, side)
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
