//! Myers' diff algorithm, adapted from
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! Finds a shortest edit script, so the number of matched elements is the
//! same as with the LCS table. Only the choice between equally long common
//! subsequences may differ.
//!
//! Unlike `similar`'s version, this one works on slices of any `PartialEq`
//! type and emits index-based [`RawOperation`]s instead of owned tokens.

use std::ops::{Index, IndexMut, Range};

use super::raw_operation::RawOperation;
use crate::utils::common_affix_len::{common_prefix_len, common_suffix_len};

/// Diff `old` and `new` in linear space.
pub fn myers_diff<T: PartialEq>(old: &[T], new: &[T]) -> Vec<RawOperation> {
    let max_d = max_d(old.len(), new.len());
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::with_capacity(old.len().max(new.len()));

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    result
}

fn max_d(old_len: usize, new_len: usize) -> usize { (old_len + new_len).div_ceil(2) + 1 }

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`.
///
/// `k` can be negative, so the vector is indexed through an `offset`.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: isize::try_from(max_d).unwrap_or(isize::MAX),
            v: vec![0; 2 * max_d],
        }
    }

    /// Position of diagonal `k` in `v`, clamped to the allocated range.
    fn slot(&self, k: isize) -> usize {
        usize::try_from(k + self.offset)
            .unwrap_or(usize::MAX)
            .min(self.v.len().saturating_sub(1))
    }

    fn len(&self) -> usize { self.v.len() }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output { &self.v[self.slot(index)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let slot = self.slot(index);
        &mut self.v[slot]
    }
}

fn signed(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// Finds the start of the middle snake of an optimal path by running the
/// greedy search from both corners until the two frontiers overlap.
fn find_middle_snake<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)> {
    let n = old_range.len();
    let m = new_range.len();

    // The optimal edit script length is odd or even as `delta` is odd or even.
    let delta = signed(n) - signed(m);
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = max_d(n, m);
    debug_assert!(vf.len() >= d_max);
    debug_assert!(vb.len() >= d_max);

    for d in 0..signed(d_max) {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(signed(x) - k).unwrap_or(0);

            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(
                    &old[old_range.start + x..old_range.end],
                    &new[new_range.start + y..new_range.end],
                );
            }

            vf[k] = x;

            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(signed(x) - k).unwrap_or(0);

            if x < n && y < m {
                let advance = common_suffix_len(
                    &old[old_range.start..old_range.start + n - x],
                    &new[new_range.start..new_range.start + m - y],
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<T: PartialEq>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<RawOperation>,
) {
    let prefix = common_prefix_len(&old[old_range.clone()], &new[new_range.clone()]);
    result.extend((0..prefix).map(|offset| RawOperation::Equal {
        old_index: old_range.start + offset,
        new_index: new_range.start + offset,
    }));
    old_range.start += prefix;
    new_range.start += prefix;

    let suffix = common_suffix_len(&old[old_range.clone()], &new[new_range.clone()]);
    let suffix_start = (old_range.end - suffix, new_range.end - suffix);
    old_range.end -= suffix;
    new_range.end -= suffix;

    if old_range.is_empty() && new_range.is_empty() {
        // nothing left between the prefix and the suffix
    } else if new_range.is_empty() {
        result.extend(
            old_range
                .clone()
                .map(|old_index| RawOperation::Delete { old_index }),
        );
    } else if old_range.is_empty() {
        result.extend(
            new_range
                .clone()
                .map(|new_index| RawOperation::Insert { new_index }),
        );
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        result.extend(
            old_range
                .clone()
                .map(|old_index| RawOperation::Delete { old_index }),
        );
        result.extend(
            new_range
                .clone()
                .map(|new_index| RawOperation::Insert { new_index }),
        );
    }

    result.extend((0..suffix).map(|offset| RawOperation::Equal {
        old_index: suffix_start.0 + offset,
        new_index: suffix_start.1 + offset,
    }));
}
