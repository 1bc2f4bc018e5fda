use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ConflictField, FieldChoice, FieldName, SongRecord};

/// Per-field choices collected from the user.
pub type FieldChoices = BTreeMap<FieldName, FieldChoice>;

/// Where a document's conflict stands, given the choices made so far.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictState {
    /// Nothing needed manual resolution.
    NoConflict,
    /// Some escalated fields have no choice yet.
    PendingResolution,
    /// Every escalated field has a choice; ready to apply.
    Resolved,
}

/// Outcome of merging two song records field by field.
///
/// A field is listed in at most one of `manual_resolution_needed` and
/// `auto_merged_fields`. Fields in neither had equal values on both sides.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMergeResult {
    /// The merged record. Escalated fields hold the local value.
    pub merged: SongRecord,
    pub manual_resolution_needed: Vec<ConflictField>,
    pub auto_merged_fields: Vec<FieldName>,
}

impl SongMergeResult {
    #[must_use]
    pub fn needs_manual_resolution(&self) -> bool { !self.manual_resolution_needed.is_empty() }

    #[must_use]
    pub fn conflict(&self, field: FieldName) -> Option<&ConflictField> {
        self.manual_resolution_needed
            .iter()
            .find(|conflict| conflict.field() == field)
    }

    #[must_use]
    pub fn is_auto_merged(&self, field: FieldName) -> bool { self.auto_merged_fields.contains(&field) }

    /// Escalated fields that `choices` does not cover yet.
    #[must_use]
    pub fn unresolved_fields(&self, choices: &FieldChoices) -> Vec<FieldName> {
        self.manual_resolution_needed
            .iter()
            .map(ConflictField::field)
            .filter(|field| !choices.contains_key(field))
            .collect()
    }

    #[must_use]
    pub fn state(&self, choices: &FieldChoices) -> ConflictState {
        if !self.needs_manual_resolution() {
            ConflictState::NoConflict
        } else if self.unresolved_fields(choices).is_empty() {
            ConflictState::Resolved
        } else {
            ConflictState::PendingResolution
        }
    }
}
