//! Line diffing, diff3-style merging and per-field conflict resolution for
//! chord-chart records edited on several devices.
//!
//! The pieces build on each other:
//!
//! - [`diff_lines`] classifies the lines of two versions of a text.
//! - [`merge_content`] merges two divergent versions of a text against their
//!   common ancestor and marks overlapping edits with conflict blocks.
//! - [`merge_songs`] merges two [`SongRecord`]s field by field and collects
//!   the fields that need a human decision.
//! - [`apply_resolutions`] turns those decisions into the final record.
//!
//! Merging never fails; only applying user input can.

pub mod conflict_markers;
mod content_merge;
mod diffs;
mod errors;
mod line_diff;
mod merge_options;
mod resolution;
mod song_merge;
pub mod tokenizer;
mod types;
mod utils;

pub use content_merge::{merge_content, merge_content_with_options};
pub use errors::ResolutionError;
pub use line_diff::{diff_lines, diff_lines_with_algorithm, diff_text};
pub use merge_options::{DiffAlgorithm, MergeOptions};
pub use resolution::{apply_resolutions, parse_choices};
pub use song_merge::{merge_songs, merge_songs_with_options};
pub use types::{
    conflict_field::ConflictField,
    diff_line::{DiffLine, LineKind},
    diff_result::DiffResult,
    field_name::{FieldName, MergeRule},
    field_value::{FieldChoice, FieldValue},
    merge_conflict::MergeConflict,
    merge_result::{MergeResult, MergedSpan, Origin},
    song_merge_result::{ConflictState, FieldChoices, SongMergeResult},
    song_record::SongRecord,
};
pub use utils::side::Side;

#[cfg(feature = "wasm")]
pub mod wasm;
