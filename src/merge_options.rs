#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Algorithm used to align two line sequences.
///
/// Both find a longest common subsequence, so the lines they report as
/// unchanged are equally many. `Myers` runs in linear space and is the better
/// choice for very long documents.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffAlgorithm {
    #[default]
    Lcs,
    Myers,
}

/// Tunables shared by the diff and merge entry points.
///
/// The defaults produce the standard `<<<<<<< LOCAL` / `>>>>>>> REMOTE`
/// markers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub diff_algorithm: DiffAlgorithm,
    pub local_label: String,
    pub remote_label: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            diff_algorithm: DiffAlgorithm::default(),
            local_label: "LOCAL".to_owned(),
            remote_label: "REMOTE".to_owned(),
        }
    }
}

impl MergeOptions {
    #[must_use]
    pub fn with_diff_algorithm(mut self, diff_algorithm: DiffAlgorithm) -> Self {
        self.diff_algorithm = diff_algorithm;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, local_label: &str, remote_label: &str) -> Self {
        local_label.clone_into(&mut self.local_label);
        remote_label.clone_into(&mut self.remote_label);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialise_partial_options() {
        let options: MergeOptions = serde_yaml::from_str("diffAlgorithm: myers\n").unwrap();
        assert_eq!(
            options,
            MergeOptions::default().with_diff_algorithm(DiffAlgorithm::Myers)
        );
    }

    #[test]
    fn test_deserialise_labels() {
        let options: MergeOptions =
            serde_yaml::from_str("localLabel: phone\nremoteLabel: tablet\n").unwrap();
        assert_eq!(options.local_label, "phone");
        assert_eq!(options.remote_label, "tablet");
        assert_eq!(options.diff_algorithm, DiffAlgorithm::Lcs);
    }
}
