//! Comparison sort used for small ranges and for ranges the radix passes
//! cannot split any further.
//!
//! Introsort over a [`Sortable`] range: median-of-three quicksort, insertion
//! sort below [`INSERTION_SORT_THRESHOLD`] elements, and heapsort once the
//! recursion depth limit is reached. Elements are only ever compared, never
//! bucketed, and the only extra memory is the `O(log n)` call stack.

use crate::core::Sortable;

const INSERTION_SORT_THRESHOLD: usize = 12;

/// Orders `i` before `j` by key, breaking ties with [`Sequence::less`](crate::core::Sequence::less).
#[inline(always)]
pub(crate) fn ordered_less<S: Sortable + ?Sized>(data: &S, i: usize, j: usize) -> bool {
    let (ki, kj) = (data.key(i), data.key(j));
    ki < kj || (ki == kj && data.less(i, j))
}

/// Sorts the half-open range `[a, b)` of `data`.
pub(crate) fn fallback_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    if b - a < 2 {
        return;
    }
    let depth_limit = 2 * (usize::BITS - (b - a).leading_zeros()) as usize;
    quick_sort(data, a, b, depth_limit);
}

fn quick_sort<S: Sortable + ?Sized>(data: &mut S, mut a: usize, mut b: usize, mut depth: usize) {
    while b - a > INSERTION_SORT_THRESHOLD {
        if depth == 0 {
            heap_sort(data, a, b);
            return;
        }
        depth -= 1;

        let mid = partition(data, a, b);
        // Recurse into the smaller side, loop on the larger one.
        if mid - a < b - mid {
            quick_sort(data, a, mid, depth);
            a = mid + 1;
        } else {
            quick_sort(data, mid + 1, b, depth);
            b = mid;
        }
    }

    if b - a > 1 {
        insertion_sort(data, a, b);
    }
}

/// Moves the median of `a`, `m` and `c` to `a`.
fn median_of_three<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, c: usize) {
    if ordered_less(&*data, a, m) {
        data.swap(a, m);
    }
    if ordered_less(&*data, c, a) {
        data.swap(c, a);
        if ordered_less(&*data, a, m) {
            data.swap(a, m);
        }
    }
}

/// Partitions `[a, b)` around a pivot and returns the pivot's final position.
///
/// Everything left of the returned index is not greater than the pivot and
/// everything right of it is not less. Equal elements are split between both
/// sides, so ranges of equal elements partition evenly.
fn partition<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) -> usize {
    median_of_three(data, a, a + (b - a) / 2, b - 1);

    let mut i = a + 1;
    let mut j = b - 1;
    loop {
        while i <= j && ordered_less(&*data, i, a) {
            i += 1;
        }
        while i <= j && ordered_less(&*data, a, j) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
    data.swap(a, j);
    j
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    for i in a + 1..b {
        let mut j = i;
        while j > a && ordered_less(&*data, j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, hi: usize, first: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= hi {
            return;
        }
        if child + 1 < hi && ordered_less(&*data, first + child, first + child + 1) {
            child += 1;
        }
        if !ordered_less(&*data, first + root, first + child) {
            return;
        }
        data.swap(first + root, first + child);
        root = child;
    }
}

fn heap_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    let hi = b - a;
    for root in (0..hi / 2).rev() {
        sift_down(data, root, hi, a);
    }
    for end in (1..hi).rev() {
        data.swap(a, a + end);
        sift_down(data, 0, end, a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_i64s(len: usize, seed: u64) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.random_range(-1000..1000)).collect()
    }

    #[test]
    fn test_fallback_sorts_whole_range() {
        for len in [0, 1, 2, 3, 12, 13, 50, 127, 500] {
            let mut input = random_i64s(len, len as u64);
            let mut expected = input.clone();
            expected.sort();

            fallback_sort(&mut input[..], 0, len);
            assert_eq!(input, expected, "len {len}");
        }
    }

    #[test]
    fn test_fallback_sorts_only_subrange() {
        let mut input: Vec<i64> = (0..100).rev().collect();
        fallback_sort(&mut input[..], 20, 60);

        let mut middle: Vec<i64> = (40..80).collect();
        middle.sort();
        assert_eq!(&input[20..60], &middle[..]);
        assert_eq!(input[..20], (80..100).rev().collect::<Vec<i64>>()[..]);
        assert_eq!(input[60..], (0..40).rev().collect::<Vec<i64>>()[..]);
    }

    #[test]
    fn test_heap_sort_directly() {
        let mut input = random_i64s(333, 7);
        let mut expected = input.clone();
        expected.sort();

        heap_sort(&mut input[..], 0, 333);
        assert_eq!(input, expected);
    }

    #[test]
    fn test_depth_exhaustion_falls_back_to_heap_sort() {
        let mut input = random_i64s(1000, 11);
        let mut expected = input.clone();
        expected.sort();

        quick_sort(&mut input[..], 0, 1000, 0);
        assert_eq!(input, expected);
    }

    #[test]
    fn test_all_equal_and_descending() {
        let mut equal = vec![42i64; 300];
        fallback_sort(&mut equal[..], 0, 300);
        assert!(equal.iter().all(|&v| v == 42));

        let mut descending: Vec<i64> = (0..300).rev().collect();
        fallback_sort(&mut descending[..], 0, 300);
        assert_eq!(descending, (0..300).collect::<Vec<i64>>());
    }
}
