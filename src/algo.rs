//! Core sorting algorithm (MSD radix sort with comparison fallback).
//!
//! The engine buckets a range by one 8-bit digit of each element's [`Key`],
//! permutes the range in place so that every bucket is contiguous, and recurses
//! into each bucket with the next lower digit. Small ranges, ranges whose keys
//! are all equal, and buckets left after the lowest digit go to the
//! comparison fallback in [`crate::fallback`].
//!
//! The main entry point is [`sort`].

use crate::core::Sortable;
use crate::fallback::fallback_sort;
use crate::key::Key;
use cuneiform::cuneiform;
use log::trace;

/// Width of one radix digit, in bits.
pub const RADIX_BITS: u32 = 8;

/// Number of buckets per radix pass (one per digit value).
pub const RADIX_BUCKETS: usize = 1 << RADIX_BITS;

const DIGIT_MASK: Key = (RADIX_BUCKETS - 1) as Key;

/// Ranges shorter than this are handed to the comparison fallback.
pub const SORT_CUTOFF: usize = 1 << 7;

/// Collections above this length are sampled more sparsely by the shift estimator.
const SPARSE_SAMPLE_THRESHOLD: usize = 1 << 16;

// Cache-aligned bucket counters, reused by every pass of one `sort` call.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts `data` in place.
///
/// Elements are ordered by [`Sortable::key`], and elements with equal keys by
/// [`Sequence::less`](crate::core::Sequence::less). The sort is not stable.
///
/// # Examples
///
/// ```
/// use keyradix::sort;
///
/// let mut data = vec![5i64, -3, 0, 5, -3];
/// sort(&mut data);
///
/// assert_eq!(data, vec![-3, -3, 0, 5, 5]);
/// ```
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    if len < SORT_CUTOFF {
        fallback_sort(data, 0, len);
        return;
    }

    let shift = guess_initial_shift(&*data, len);
    trace!("radix sort of {len} elements, initial shift {shift}");

    let mut counts = RadixCounts {
        data: [0; RADIX_BUCKETS],
    };
    radix_sort(data, shift, 0, len, &mut counts.data);
}

/// Returns the shift of the lowest digit that holds the top varying bit of `diff`.
///
/// Shifts are aligned to whole digits. Returns 0 when `diff` is 0.
#[inline]
fn digit_aligned_shift(diff: Key) -> u32 {
    let bits = Key::BITS - diff.leading_zeros();
    if bits == 0 {
        return 0;
    }
    ((bits - 1) / RADIX_BITS) * RADIX_BITS
}

/// Samples `data` to guess which digit holds the highest varying key bit.
///
/// For keys spread over `0..2^32` this returns 24. A wrong guess is corrected
/// by [`radix_sort`] after its first full pass over the keys.
pub(crate) fn guess_initial_shift<S: Sortable + ?Sized>(data: &S, len: usize) -> u32 {
    let step = if len > SPARSE_SAMPLE_THRESHOLD {
        len >> 8
    } else {
        len >> 5
    }
    .max(1);

    let mut min = data.key(len - 1);
    let mut max = min;
    for i in (0..len).step_by(step) {
        let k = data.key(i);
        min = min.min(k);
        max = max.max(k);
    }

    digit_aligned_shift(min ^ max)
}

/// Sorts `[a, b)` by the digit at `shift` and recurses into every bucket.
///
/// `scratch` is overwritten on entry; callers must not rely on its contents.
fn radix_sort<S: Sortable + ?Sized>(
    data: &mut S,
    shift: u32,
    a: usize,
    b: usize,
    scratch: &mut [usize; RADIX_BUCKETS],
) {
    if b - a < SORT_CUTOFF {
        fallback_sort(data, a, b);
        return;
    }

    // 1. Count digits and find the exact key range in one pass.
    scratch.fill(0);
    let mut min = data.key(a);
    let mut max = min;
    for i in a..b {
        let k = data.key(i);
        scratch[((k >> shift) & DIGIT_MASK) as usize] += 1;
        min = min.min(k);
        max = max.max(k);
    }

    // 2. Skip constant digits; never partition a range whose keys are all equal.
    let diff = min ^ max;
    if diff == 0 {
        fallback_sort(data, a, b);
        return;
    }
    if diff >> shift == 0 || diff.checked_shr(shift + RADIX_BITS).unwrap_or(0) != 0 {
        let bits = Key::BITS - diff.leading_zeros();
        let next_shift = bits.saturating_sub(RADIX_BITS);
        trace!("range {a}..{b}: shift {shift} misses the varying bits, retrying at {next_shift}");
        radix_sort(data, next_shift, a, b, scratch);
        return;
    }

    // 3. Prefix sums: bucket c occupies [starts[c], ends[c]).
    let starts = scratch;
    let mut ends = [0usize; RADIX_BUCKETS];
    let mut pos = a;
    starts
        .iter_mut()
        .zip(ends.iter_mut())
        .for_each(|(start, end)| {
            let count = *start;
            *start = pos;
            pos += count;
            *end = pos;
        });

    // 4. Permute in place. Each misplaced element is swapped into the next free
    //    slot of its own bucket; buckets before `bucket` are already complete.
    for (bucket, &end) in ends.iter().enumerate() {
        let mut i = starts[bucket];
        while i < end {
            let dest = ((data.key(i) >> shift) & DIGIT_MASK) as usize;
            if dest == bucket {
                i += 1;
                starts[bucket] += 1;
                continue;
            }
            data.swap(i, starts[dest]);
            starts[dest] += 1;
        }
    }

    // 5. Finish each bucket.
    let mut pos = a;
    if shift == 0 {
        for &end in ends.iter() {
            if end > pos + 1 {
                fallback_sort(data, pos, end);
            }
            pos = end;
        }
        return;
    }

    let next_shift = shift.saturating_sub(RADIX_BITS);
    for &end in ends.iter() {
        if end > pos + 1 {
            radix_sort(data, next_shift, pos, end, starts);
        }
        pos = end;
    }
}
