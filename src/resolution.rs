use log::debug;

use crate::{
    FieldChoice, FieldChoices, FieldName, FieldValue, ResolutionError, SongMergeResult,
    SongRecord, conflict_markers::find_conflict_blocks,
};

/// Produce the final record from a merge result and the user's choices.
///
/// `Local` leaves the value already in `result.merged` untouched (for an
/// escalated field that is the local value), `Remote` copies the field from
/// `remote` and `Custom` stores the given value. Fields without a choice keep
/// their merged value too. Choices are independent of each other, so applying them in any
/// order, or more than once, gives the same record.
///
/// # Errors
///
/// - [`ResolutionError::ValueKindMismatch`] if a custom value does not fit
///   its field.
/// - [`ResolutionError::UnresolvedConflictMarkers`] if custom content still
///   contains a conflict block.
pub fn apply_resolutions(
    result: &SongMergeResult,
    remote: &SongRecord,
    choices: &FieldChoices,
) -> Result<SongRecord, ResolutionError> {
    let mut resolved = result.merged.clone();

    for (&field, choice) in choices {
        debug!("resolving {field} with {choice:?}");

        match choice {
            FieldChoice::Local => {}
            FieldChoice::Remote => resolved.copy_field(remote, field),
            FieldChoice::Custom(value) => {
                if let (FieldName::Content, FieldValue::Text(content)) = (field, value) {
                    ensure_no_markers(content)?;
                }
                resolved.set(field, value.clone())?;
            }
        }
    }

    Ok(resolved)
}

/// Build [`FieldChoices`] from choices keyed by field identifiers, as they
/// arrive from a UI.
///
/// # Errors
///
/// [`ResolutionError::UnknownField`] for the first key that names no field.
pub fn parse_choices<'a, I>(choices: I) -> Result<FieldChoices, ResolutionError>
where
    I: IntoIterator<Item = (&'a str, FieldChoice)>,
{
    choices
        .into_iter()
        .map(|(name, choice)| name.parse::<FieldName>().map(|field| (field, choice)))
        .collect()
}

fn ensure_no_markers(content: &str) -> Result<(), ResolutionError> {
    let blocks = find_conflict_blocks(content);
    match blocks.first() {
        Some(first) => Err(ResolutionError::UnresolvedConflictMarkers {
            count: blocks.len(),
            first_line: first.start_line,
        }),
        None => Ok(()),
    }
}
