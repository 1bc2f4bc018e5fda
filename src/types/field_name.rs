use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ResolutionError;

/// How the values of a field are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Classic three-way rule on a single value.
    Scalar,
    /// Line-based three-way text merge.
    Content,
    /// Union of both sides minus elements that both sides removed.
    TagSet,
}

/// The mergeable fields of a [`crate::SongRecord`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Title,
    Artist,
    Album,
    Key,
    Tempo,
    TimeSignature,
    Content,
    Tags,
    Notes,
}

impl FieldName {
    /// Every field, in record order.
    pub const ALL: [FieldName; 9] = [
        FieldName::Title,
        FieldName::Artist,
        FieldName::Album,
        FieldName::Key,
        FieldName::Tempo,
        FieldName::TimeSignature,
        FieldName::Content,
        FieldName::Tags,
        FieldName::Notes,
    ];

    /// The stable identifier used in conflict records and resolution maps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Artist => "artist",
            FieldName::Album => "album",
            FieldName::Key => "key",
            FieldName::Tempo => "tempo",
            FieldName::TimeSignature => "timeSignature",
            FieldName::Content => "content",
            FieldName::Tags => "tags",
            FieldName::Notes => "notes",
        }
    }

    #[must_use]
    pub const fn rule(self) -> MergeRule {
        match self {
            FieldName::Title
            | FieldName::Artist
            | FieldName::Album
            | FieldName::Key
            | FieldName::Tempo
            | FieldName::TimeSignature
            | FieldName::Notes => MergeRule::Scalar,
            FieldName::Content => MergeRule::Content,
            FieldName::Tags => MergeRule::TagSet,
        }
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ResolutionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| ResolutionError::UnknownField(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "capo".parse::<FieldName>(),
            Err(ResolutionError::UnknownField("capo".to_owned()))
        );
        assert_eq!(
            "time_signature".parse::<FieldName>(),
            Err(ResolutionError::UnknownField("time_signature".to_owned()))
        );
    }

    #[test]
    fn test_rules() {
        assert_eq!(FieldName::Content.rule(), MergeRule::Content);
        assert_eq!(FieldName::Tags.rule(), MergeRule::TagSet);
        assert_eq!(
            FieldName::ALL
                .iter()
                .filter(|field| field.rule() == MergeRule::Scalar)
                .count(),
            7
        );
    }
}
