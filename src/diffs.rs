pub mod lcs;
pub mod myers;
pub mod raw_operation;

use raw_operation::RawOperation;

use crate::DiffAlgorithm;

/// Compute the edit script turning `old` into `new` with the given algorithm.
pub fn diff<T: PartialEq>(old: &[T], new: &[T], algorithm: DiffAlgorithm) -> Vec<RawOperation> {
    match algorithm {
        DiffAlgorithm::Lcs => lcs::lcs_diff(old, new),
        DiffAlgorithm::Myers => myers::myers_diff(old, new),
    }
}
