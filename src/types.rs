pub mod conflict_field;
pub mod diff_line;
pub mod diff_result;
pub mod field_name;
pub mod field_value;
pub mod merge_conflict;
pub mod merge_result;
pub mod song_merge_result;
pub mod song_record;
