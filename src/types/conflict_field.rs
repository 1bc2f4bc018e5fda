use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FieldName, MergeConflict, SongRecord};

/// A field whose local and remote values could not be reconciled
/// automatically, with both candidates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", tag = "field"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictField {
    Title {
        local: String,
        remote: String,
    },
    Artist {
        local: Option<String>,
        remote: Option<String>,
    },
    Album {
        local: Option<String>,
        remote: Option<String>,
    },
    Key {
        local: Option<String>,
        remote: Option<String>,
    },
    Tempo {
        local: Option<u32>,
        remote: Option<u32>,
    },
    TimeSignature {
        local: Option<String>,
        remote: Option<String>,
    },
    /// Resolving this one usually means editing the markers out of `merged`
    /// and submitting the result as a custom value.
    Content {
        local: String,
        remote: String,
        /// Merged text with a marker block for every conflict.
        merged: String,
        conflicts: Vec<MergeConflict>,
    },
    /// Tags always merge automatically; the variant exists so every field has
    /// one.
    Tags {
        local: BTreeSet<String>,
        remote: BTreeSet<String>,
    },
    Notes {
        local: Option<String>,
        remote: Option<String>,
    },
}

impl ConflictField {
    /// The conflict between the `field` values of two records, for fields
    /// whose conflict is fully described by the two values. `None` for
    /// `content`, whose conflict also carries the merge output.
    #[must_use]
    pub fn between(field: FieldName, local: &SongRecord, remote: &SongRecord) -> Option<Self> {
        Some(match field {
            FieldName::Title => ConflictField::Title {
                local: local.title.clone(),
                remote: remote.title.clone(),
            },
            FieldName::Artist => ConflictField::Artist {
                local: local.artist.clone(),
                remote: remote.artist.clone(),
            },
            FieldName::Album => ConflictField::Album {
                local: local.album.clone(),
                remote: remote.album.clone(),
            },
            FieldName::Key => ConflictField::Key {
                local: local.key.clone(),
                remote: remote.key.clone(),
            },
            FieldName::Tempo => ConflictField::Tempo {
                local: local.tempo,
                remote: remote.tempo,
            },
            FieldName::TimeSignature => ConflictField::TimeSignature {
                local: local.time_signature.clone(),
                remote: remote.time_signature.clone(),
            },
            FieldName::Content => return None,
            FieldName::Tags => ConflictField::Tags {
                local: local.tags.clone(),
                remote: remote.tags.clone(),
            },
            FieldName::Notes => ConflictField::Notes {
                local: local.notes.clone(),
                remote: remote.notes.clone(),
            },
        })
    }

    #[must_use]
    pub fn field(&self) -> FieldName {
        match self {
            ConflictField::Title { .. } => FieldName::Title,
            ConflictField::Artist { .. } => FieldName::Artist,
            ConflictField::Album { .. } => FieldName::Album,
            ConflictField::Key { .. } => FieldName::Key,
            ConflictField::Tempo { .. } => FieldName::Tempo,
            ConflictField::TimeSignature { .. } => FieldName::TimeSignature,
            ConflictField::Content { .. } => FieldName::Content,
            ConflictField::Tags { .. } => FieldName::Tags,
            ConflictField::Notes { .. } => FieldName::Notes,
        }
    }
}
