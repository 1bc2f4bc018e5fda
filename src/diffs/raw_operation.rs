/// A single step of an edit script turning an `old` sequence into a `new`
/// one. Each operation refers to exactly one element by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOperation {
    Equal { old_index: usize, new_index: usize },
    Delete { old_index: usize },
    Insert { new_index: usize },
}

impl RawOperation {
    pub fn is_equal(&self) -> bool { matches!(self, RawOperation::Equal { .. }) }
}

/// For every element of `old`, the index of the `new` element it was matched
/// with by the edit script, if any.
///
/// The matched indices are strictly increasing, which is what the three-way
/// merge relies on when it looks for stable lines.
pub fn matching_indices(operations: &[RawOperation], old_len: usize) -> Vec<Option<usize>> {
    let mut result = vec![None; old_len];
    for operation in operations {
        if let RawOperation::Equal {
            old_index,
            new_index,
        } = *operation
        {
            result[old_index] = Some(new_index);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_matching_indices() {
        let operations = vec![
            RawOperation::Equal {
                old_index: 0,
                new_index: 0,
            },
            RawOperation::Delete { old_index: 1 },
            RawOperation::Insert { new_index: 1 },
            RawOperation::Insert { new_index: 2 },
            RawOperation::Equal {
                old_index: 2,
                new_index: 3,
            },
        ];

        assert_eq!(
            matching_indices(&operations, 3),
            vec![Some(0), None, Some(3)]
        );
    }
}
