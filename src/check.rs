//! Post-sort consistency checks.
//!
//! None of this runs as part of [`sort`](crate::algo::sort). Call [`verify`] or
//! [`check`] from tests or debug builds to find out whether a [`Sortable`]
//! implementation keeps its two ordering functions in agreement.

use crate::core::{Sequence, Sortable};
use thiserror::Error;

/// Why a collection failed the post-sort check.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// `less` and `key` order the elements at `index - 1` and `index` in opposite directions.
    #[error("less and key do not order items the same way (at index {index})")]
    Inconsistent { index: usize },
    /// The pair at `index - 1`, `index` is out of order although `less` and
    /// `key` agree. Points at a non-deterministic `less` or `key`, or at the
    /// data being mutated during the sort.
    #[error(
        "failed to sort data (at index {index}); could be nondeterministic less or key, or concurrent mutation"
    )]
    Unsorted { index: usize },
}

/// Checks that `data` is in order and that its `less` and `key` agree on every
/// adjacent pair.
pub fn verify<S: Sortable + ?Sized>(data: &S) -> Result<(), OrderError> {
    for index in 1..data.len() {
        let (prev, cur) = (data.key(index - 1), data.key(index));
        if data.less(index, index - 1) {
            if cur > prev {
                return Err(OrderError::Inconsistent { index });
            }
            return Err(OrderError::Unsorted { index });
        }
        if cur < prev {
            return Err(OrderError::Inconsistent { index });
        }
    }
    Ok(())
}

/// Like [`verify`], but panics with the diagnostic on failure.
///
/// # Panics
///
/// If `data` is not sorted, or its `less` and `key` disagree.
pub fn check<S: Sortable + ?Sized>(data: &S) {
    if let Err(err) = verify(data) {
        panic!("keyradix: {err}");
    }
}

/// Reports whether `data` is sorted according to its `less`.
pub fn is_sorted<S: Sequence + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}
