use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value of any record field, used for custom resolutions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
    Tags(BTreeSet<String>),
    /// Clears an optional field.
    Empty,
}

impl FieldValue {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "a number",
            FieldValue::Tags(_) => "a tag set",
            FieldValue::Empty => "empty",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self { FieldValue::Text(text.to_owned()) }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self { FieldValue::Text(text) }
}

impl From<u32> for FieldValue {
    fn from(number: u32) -> Self { FieldValue::Number(number) }
}

impl From<BTreeSet<String>> for FieldValue {
    fn from(tags: BTreeSet<String>) -> Self { FieldValue::Tags(tags) }
}

impl From<Option<String>> for FieldValue {
    fn from(text: Option<String>) -> Self { text.map_or(FieldValue::Empty, FieldValue::Text) }
}

impl From<Option<u32>> for FieldValue {
    fn from(number: Option<u32>) -> Self { number.map_or(FieldValue::Empty, FieldValue::Number) }
}

/// The user's decision for one unresolved field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChoice {
    /// Keep the value already in the merged record untouched (the local one
    /// for escalated fields).
    Local,
    Remote,
    Custom(FieldValue),
}

impl FieldChoice {
    pub fn custom(value: impl Into<FieldValue>) -> Self { FieldChoice::Custom(value.into()) }
}
