use thiserror::Error;

use crate::FieldName;

/// Errors raised while turning user-supplied resolution input into a final
/// record. Merging itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// A field name coming from the caller does not name a record field
    #[error("Unknown song field `{0}`")]
    UnknownField(String),

    /// A custom value does not have the shape the field stores
    #[error("Custom value for `{field}` must be {expected}, got {actual}")]
    ValueKindMismatch {
        /// The field the value was meant for
        field: FieldName,
        /// Description of the accepted value kind
        expected: &'static str,
        /// Description of the supplied value kind
        actual: &'static str,
    },

    /// Custom content still contains conflict marker lines
    #[error(
        "Custom content still contains {count} unresolved conflict block(s), the first one \
         starting at line {first_line}"
    )]
    UnresolvedConflictMarkers {
        /// Number of marker blocks found
        count: usize,
        /// 0-based line of the first `<<<<<<<` marker
        first_line: usize,
    },
}
