//! LCS diff algorithm.
//!
//! * time: `O(NM)`
//! * space `O(NM)`
//!
//! The common prefix and suffix are matched up front so the table only covers
//! the region that actually differs. Regions whose table would exceed
//! [`MAX_TABLE_CELLS`] are handed to the linear-space Myers diff instead.

use super::{myers::myers_diff, raw_operation::RawOperation};
use crate::utils::common_affix_len::{common_prefix_len, common_suffix_len};

/// Diff `old` and `new` by building the full longest-common-subsequence table
/// and backtracking from its bottom-right corner.
pub fn lcs_diff<T: PartialEq>(old: &[T], new: &[T]) -> Vec<RawOperation> {
    let prefix = common_prefix_len(old, new);
    let suffix = common_suffix_len(&old[prefix..], &new[prefix..]);

    let old_middle = &old[prefix..old.len() - suffix];
    let new_middle = &new[prefix..new.len() - suffix];

    if !fits_table(old_middle.len(), new_middle.len()) {
        return myers_diff(old, new);
    }

    let mut result = Vec::with_capacity(old.len().max(new.len()));
    result.extend((0..prefix).map(|index| RawOperation::Equal {
        old_index: index,
        new_index: index,
    }));

    let table = LcsTable::new(old_middle, new_middle);
    let mut middle = Vec::with_capacity(old_middle.len() + new_middle.len());
    let (mut i, mut j) = (old_middle.len(), new_middle.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old_middle[i - 1] == new_middle[j - 1] {
            middle.push(RawOperation::Equal {
                old_index: prefix + i - 1,
                new_index: prefix + j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            // Walking backwards, so preferring inserts here puts deletions
            // first within each hunk once the result is reversed.
            middle.push(RawOperation::Insert {
                new_index: prefix + j - 1,
            });
            j -= 1;
        } else {
            middle.push(RawOperation::Delete {
                old_index: prefix + i - 1,
            });
            i -= 1;
        }
    }

    result.extend(middle.into_iter().rev());
    result.extend((0..suffix).map(|offset| RawOperation::Equal {
        old_index: old.len() - suffix + offset,
        new_index: new.len() - suffix + offset,
    }));

    result
}

/// 4M cells, 16 MiB of `u32`s.
pub const MAX_TABLE_CELLS: usize = 1 << 22;

fn fits_table(old_len: usize, new_len: usize) -> bool {
    old_len
        .checked_add(1)
        .zip(new_len.checked_add(1))
        .and_then(|(rows, width)| rows.checked_mul(width))
        .is_some_and(|cells| cells <= MAX_TABLE_CELLS)
}

/// `table.get(i, j)` is the length of the LCS of the first `i` elements of
/// `old` and the first `j` elements of `new`.
#[derive(Debug)]
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn new<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0; (old.len() + 1) * width];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * width + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * width + j - 1] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + j - 1])
                };
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 { self.cells[i * self.width + j] }

    #[cfg(test)]
    fn len(&self) -> u32 { self.cells.last().copied().unwrap_or(0) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_table() {
        let table = LcsTable::new(&[2, 3], &[0, 1, 2]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1, 3), 1);
        assert_eq!(table.get(2, 2), 0);

        let table = LcsTable::new(&["C", "G", "Am", "F"], &["C", "F", "Am", "F"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_fits_table() {
        assert!(fits_table(0, 0));
        assert!(fits_table(1000, 1000));
        assert!(!fits_table(4096, 4096));
        assert!(!fits_table(usize::MAX, 1));
    }

    #[test]
    fn test_large_regions_fall_back_to_myers() {
        let old = (0..3000).map(|i| i % 7).collect::<Vec<_>>();
        let new = (0..3000).map(|i| i % 5).collect::<Vec<_>>();
        assert!(!fits_table(old.len(), new.len()));

        assert_eq!(lcs_diff(&old, &new), myers_diff(&old, &new));
    }

    #[test]
    fn test_empty_examples() {
        assert_eq!(lcs_diff::<&str>(&[], &[]), vec![]);
        assert_eq!(
            lcs_diff(&["a"], &[]),
            vec![RawOperation::Delete { old_index: 0 }]
        );
        assert_eq!(
            lcs_diff(&[], &["a"]),
            vec![RawOperation::Insert { new_index: 0 }]
        );
    }

    #[test]
    fn test_replacement_puts_deletion_first() {
        assert_eq!(
            lcs_diff(&["C", "G", "Am"], &["C", "D", "Am"]),
            vec![
                RawOperation::Equal {
                    old_index: 0,
                    new_index: 0
                },
                RawOperation::Delete { old_index: 1 },
                RawOperation::Insert { new_index: 1 },
                RawOperation::Equal {
                    old_index: 2,
                    new_index: 2
                },
            ]
        );
    }

    #[test]
    fn test_every_element_is_visited_once() {
        let old = ["a", "b", "c", "a", "b", "b", "a"];
        let new = ["c", "b", "a", "b", "a", "c"];
        let operations = lcs_diff(&old, &new);

        let equal = operations.iter().filter(|op| op.is_equal()).count();
        let deleted = operations
            .iter()
            .filter(|op| matches!(op, RawOperation::Delete { .. }))
            .count();
        let inserted = operations
            .iter()
            .filter(|op| matches!(op, RawOperation::Insert { .. }))
            .count();

        assert_eq!(equal, 4);
        assert_eq!(equal + deleted, old.len());
        assert_eq!(equal + inserted, new.len());
    }
}
