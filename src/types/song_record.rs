use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FieldName, FieldValue, ResolutionError};

/// A snapshot of a chord chart as stored on one device.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongRecord {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub key: Option<String>,
    /// Beats per minute.
    pub tempo: Option<u32>,
    pub time_signature: Option<String>,
    /// The chart itself, one line per lyric or chord row.
    pub content: String,
    pub tags: BTreeSet<String>,
    pub notes: Option<String>,
}

impl SongRecord {
    #[must_use]
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_owned(),
            content: content.to_owned(),
            ..Self::default()
        }
    }

    /// A copy of the value stored in `field`.
    #[must_use]
    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Title => FieldValue::Text(self.title.clone()),
            FieldName::Artist => self.artist.clone().into(),
            FieldName::Album => self.album.clone().into(),
            FieldName::Key => self.key.clone().into(),
            FieldName::Tempo => self.tempo.into(),
            FieldName::TimeSignature => self.time_signature.clone().into(),
            FieldName::Content => FieldValue::Text(self.content.clone()),
            FieldName::Tags => FieldValue::Tags(self.tags.clone()),
            FieldName::Notes => self.notes.clone().into(),
        }
    }

    /// Overwrite `field` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::ValueKindMismatch`] if `value` cannot be
    /// stored in `field`; the record is left unchanged in that case.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), ResolutionError> {
        match (field, value) {
            (FieldName::Title, FieldValue::Text(text)) => self.title = text,
            (FieldName::Content, FieldValue::Text(text)) => self.content = text,
            (FieldName::Tempo, FieldValue::Number(tempo)) => self.tempo = Some(tempo),
            (FieldName::Tempo, FieldValue::Empty) => self.tempo = None,
            (FieldName::Tags, FieldValue::Tags(tags)) => self.tags = tags,
            (FieldName::Tags, FieldValue::Empty) => self.tags.clear(),
            (field, value @ (FieldValue::Text(_) | FieldValue::Empty)) => {
                let Some(slot) = self.optional_text_mut(field) else {
                    return Err(mismatch(field, &value));
                };
                *slot = match value {
                    FieldValue::Text(text) => Some(text),
                    _ => None,
                };
            }
            (field, value) => return Err(mismatch(field, &value)),
        }

        Ok(())
    }

    /// Overwrite `field` with the value `other` holds for it.
    pub fn copy_field(&mut self, other: &SongRecord, field: FieldName) {
        match field {
            FieldName::Title => self.title.clone_from(&other.title),
            FieldName::Artist => self.artist.clone_from(&other.artist),
            FieldName::Album => self.album.clone_from(&other.album),
            FieldName::Key => self.key.clone_from(&other.key),
            FieldName::Tempo => self.tempo = other.tempo,
            FieldName::TimeSignature => self.time_signature.clone_from(&other.time_signature),
            FieldName::Content => self.content.clone_from(&other.content),
            FieldName::Tags => self.tags.clone_from(&other.tags),
            FieldName::Notes => self.notes.clone_from(&other.notes),
        }
    }

    fn optional_text_mut(&mut self, field: FieldName) -> Option<&mut Option<String>> {
        match field {
            FieldName::Artist => Some(&mut self.artist),
            FieldName::Album => Some(&mut self.album),
            FieldName::Key => Some(&mut self.key),
            FieldName::TimeSignature => Some(&mut self.time_signature),
            FieldName::Notes => Some(&mut self.notes),
            FieldName::Title | FieldName::Tempo | FieldName::Content | FieldName::Tags => None,
        }
    }
}

fn mismatch(field: FieldName, value: &FieldValue) -> ResolutionError {
    ResolutionError::ValueKindMismatch {
        field,
        expected: expected_kind(field),
        actual: value.kind(),
    }
}

fn expected_kind(field: FieldName) -> &'static str {
    match field {
        FieldName::Title | FieldName::Content => "text",
        FieldName::Tempo => "a number or empty",
        FieldName::Tags => "a tag set or empty",
        FieldName::Artist
        | FieldName::Album
        | FieldName::Key
        | FieldName::TimeSignature
        | FieldName::Notes => "text or empty",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_then_value() {
        let mut song = SongRecord::new("Be Thou My Vision", "D G D");

        song.set(FieldName::Key, "D".into()).unwrap();
        song.set(FieldName::Tempo, 72_u32.into()).unwrap();
        song.set(FieldName::Notes, FieldValue::Empty).unwrap();

        assert_eq!(song.value(FieldName::Key), FieldValue::Text("D".to_owned()));
        assert_eq!(song.value(FieldName::Tempo), FieldValue::Number(72));
        assert_eq!(song.value(FieldName::Notes), FieldValue::Empty);
        assert_eq!(song.value(FieldName::Tags), FieldValue::Tags(BTreeSet::new()));
    }

    #[test]
    fn test_mismatched_value_is_rejected() {
        let mut song = SongRecord::new("Be Thou My Vision", "D G D");

        assert_eq!(
            song.set(FieldName::Tempo, "fast".into()),
            Err(ResolutionError::ValueKindMismatch {
                field: FieldName::Tempo,
                expected: "a number or empty",
                actual: "text",
            })
        );
        assert_eq!(
            song.set(FieldName::Title, FieldValue::Empty),
            Err(ResolutionError::ValueKindMismatch {
                field: FieldName::Title,
                expected: "text",
                actual: "empty",
            })
        );
        assert_eq!(song, SongRecord::new("Be Thou My Vision", "D G D"));
    }
}
