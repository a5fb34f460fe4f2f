//! Contract implementations for built-in collections, plus typed shortcuts.
//!
//! Slices and `Vec`s of the primitive integer and float types implement
//! [`Sortable`] directly. Slices and `Vec`s of strings and byte sequences
//! implement [`StrAccessor`] / [`BytesAccessor`] and are sorted through
//! [`sort_strings`](crate::index::sort_strings) /
//! [`sort_bytes`](crate::index::sort_bytes), which cache a
//! prefix key per element.
//!
//! [`sort_by_key`] and [`sort_by_cached_key`] sort slices of arbitrary records
//! by a caller-supplied key function.

use crate::algo::sort;
use crate::check::is_sorted;
use crate::core::{BytesAccessor, IndexBuilder, Sequence, Sortable, StrAccessor};
use crate::index::sort_index;
use crate::key::{
    Key, float32_key, float32_less, float64_key, float64_less, int32_key, int64_key, uint_key,
};

#[inline(always)]
fn natural_less<T: PartialOrd>(a: T, b: T) -> bool {
    a < b
}

#[inline(always)]
fn isize_key(value: isize) -> Key {
    int64_key(value as i64)
}

#[inline(always)]
fn usize_key(value: usize) -> Key {
    value as Key
}

// Slices and Vecs of types with a direct key function.
macro_rules! impl_sortable {
    ($($t:ty => $key:expr, $less:expr;)*) => {
        $(
            impl Sequence for [$t] {
                fn len(&self) -> usize {
                    <[$t]>::len(self)
                }

                fn less(&self, i: usize, j: usize) -> bool {
                    $less(self[i], self[j])
                }

                fn swap(&mut self, i: usize, j: usize) {
                    <[$t]>::swap(self, i, j)
                }
            }

            impl Sortable for [$t] {
                #[inline(always)]
                fn key(&self, i: usize) -> Key {
                    $key(self[i])
                }
            }

            impl Sequence for Vec<$t> {
                fn len(&self) -> usize {
                    self.as_slice().len()
                }

                fn less(&self, i: usize, j: usize) -> bool {
                    $less(self[i], self[j])
                }

                fn swap(&mut self, i: usize, j: usize) {
                    self.as_mut_slice().swap(i, j)
                }
            }

            impl Sortable for Vec<$t> {
                #[inline(always)]
                fn key(&self, i: usize) -> Key {
                    $key(self[i])
                }
            }
        )*
    };
}

impl_sortable! {
    i32 => int32_key, natural_less;
    i64 => int64_key, natural_less;
    isize => isize_key, natural_less;
    u32 => uint_key::<u32>, natural_less;
    u64 => uint_key::<u64>, natural_less;
    usize => usize_key, natural_less;
    f32 => float32_key, float32_less;
    f64 => float64_key, float64_less;
}

// Slices and Vecs of string-like or byte-like elements.
macro_rules! impl_accessor {
    ($trait:ident, $method:ident, $out:ty; $($t:ty => $view:expr;)*) => {
        $(
            impl Sequence for [$t] {
                fn len(&self) -> usize {
                    <[$t]>::len(self)
                }

                fn less(&self, i: usize, j: usize) -> bool {
                    $view(&self[i]) < $view(&self[j])
                }

                fn swap(&mut self, i: usize, j: usize) {
                    <[$t]>::swap(self, i, j)
                }
            }

            impl $trait for [$t] {
                fn $method(&self, index: usize) -> &$out {
                    $view(&self[index])
                }
            }

            impl Sequence for Vec<$t> {
                fn len(&self) -> usize {
                    self.as_slice().len()
                }

                fn less(&self, i: usize, j: usize) -> bool {
                    $view(&self[i]) < $view(&self[j])
                }

                fn swap(&mut self, i: usize, j: usize) {
                    self.as_mut_slice().swap(i, j)
                }
            }

            impl $trait for Vec<$t> {
                fn $method(&self, index: usize) -> &$out {
                    $view(&self[index])
                }
            }
        )*
    };
}

impl_accessor! {
    StrAccessor, str_at, str;
    String => String::as_str;
    &str => <&str>::clone;
}

impl_accessor! {
    BytesAccessor, bytes_at, [u8];
    Vec<u8> => Vec::<u8>::as_slice;
    &[u8] => <&[u8]>::clone;
}

// Typed shortcuts for primitive slices.
macro_rules! typed_shortcuts {
    ($($t:ty => $sort_fn:ident, $sorted_fn:ident;)*) => {
        $(
            #[doc = concat!("Sorts a slice of `", stringify!($t), "` in increasing order.")]
            pub fn $sort_fn(data: &mut [$t]) {
                sort(data);
            }

            #[doc = concat!("Reports whether a slice of `", stringify!($t), "` is in increasing order.")]
            pub fn $sorted_fn(data: &[$t]) -> bool {
                is_sorted(data)
            }
        )*
    };
}

typed_shortcuts! {
    i32 => sort_i32s, i32s_are_sorted;
    i64 => sort_i64s, i64s_are_sorted;
    isize => sort_isizes, isizes_are_sorted;
    u32 => sort_u32s, u32s_are_sorted;
    u64 => sort_u64s, u64s_are_sorted;
    usize => sort_usizes, usizes_are_sorted;
}

/// Sorts a slice of `f32` in increasing order, NaNs last.
pub fn sort_f32s(data: &mut [f32]) {
    sort(data);
}

/// Reports whether a slice of `f32` is in increasing order, NaNs last.
pub fn f32s_are_sorted(data: &[f32]) -> bool {
    is_sorted(data)
}

/// Sorts a slice of `f64` in increasing order, NaNs last.
///
/// # Examples
///
/// ```
/// use keyradix::sort_f64s;
///
/// let mut data = [1.0, f64::NAN, -1.0, 0.0];
/// sort_f64s(&mut data);
///
/// assert_eq!(data[..3], [-1.0, 0.0, 1.0]);
/// assert!(data[3].is_nan());
/// ```
pub fn sort_f64s(data: &mut [f64]) {
    sort(data);
}

/// Reports whether a slice of `f64` is in increasing order, NaNs last.
pub fn f64s_are_sorted(data: &[f64]) -> bool {
    is_sorted(data)
}

/// Adapts a slice of records and a key function to the sort traits.
///
/// Equal keys carry no further order.
struct ByKey<'a, T, F> {
    items: &'a mut [T],
    key_fn: F,
}

impl<T, F: Fn(&T) -> Key> Sequence for ByKey<'_, T, F> {
    fn len(&self) -> usize {
        self.items.len()
    }

    // Keys are compared before `less` is consulted, so ties stay unordered.
    fn less(&self, _i: usize, _j: usize) -> bool {
        false
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}

impl<T, F: Fn(&T) -> Key> Sortable for ByKey<'_, T, F> {
    #[inline(always)]
    fn key(&self, i: usize) -> Key {
        (self.key_fn)(&self.items[i])
    }
}

impl<T, F: Fn(&T) -> Key> IndexBuilder for ByKey<'_, T, F> {
    fn set_keys(&self, keys: &mut [Key], offset: usize) {
        keys.iter_mut()
            .zip(self.items.iter().skip(offset))
            .for_each(|(slot, item)| *slot = (self.key_fn)(item));
    }
}

/// Sorts `items` by `key_fn`, calling it again every time a key is needed.
///
/// Use this when the key is cheap, such as a field read. Not stable.
///
/// # Examples
///
/// ```
/// use keyradix::{int64_key, sort_by_key};
///
/// let mut offsets = [(3, 'c'), (-8, 'a'), (0, 'b')];
/// sort_by_key(&mut offsets, |&(at, _)| int64_key(at));
///
/// assert_eq!(offsets, [(-8, 'a'), (0, 'b'), (3, 'c')]);
/// ```
pub fn sort_by_key<T, F: Fn(&T) -> Key>(items: &mut [T], key_fn: F) {
    sort(&mut ByKey { items, key_fn });
}

/// Sorts `items` by `key_fn`, calling it exactly once per element.
///
/// Allocates one [`Key`] per element. Not stable.
pub fn sort_by_cached_key<T, F: Fn(&T) -> Key>(items: &mut [T], key_fn: F) {
    sort_index(&mut ByKey { items, key_fn });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_integer_scenario() {
        let mut data = vec![5i64, -3, 0, 5, -3];
        sort(&mut data);
        assert_eq!(data, vec![-3, -3, 0, 5, 5]);
        assert!(i64s_are_sorted(&data));
    }

    #[test]
    fn test_float_scenario_nan_last() {
        let mut data = vec![1.0f64, f64::NAN, -1.0, 0.0];
        sort(&mut data);
        assert_eq!(data[..3], [-1.0, 0.0, 1.0]);
        assert!(data[3].is_nan());
        assert!(f64s_are_sorted(&data));
    }

    #[test]
    fn test_typed_shortcuts() {
        let mut a = [3i32, -1, 2];
        sort_i32s(&mut a);
        assert_eq!(a, [-1, 2, 3]);
        assert!(i32s_are_sorted(&a));

        let mut b = [3u32, 1, 2];
        sort_u32s(&mut b);
        assert_eq!(b, [1, 2, 3]);
        assert!(u32s_are_sorted(&b));

        let mut c = [usize::MAX, 0, 9];
        sort_usizes(&mut c);
        assert_eq!(c, [0, 9, usize::MAX]);
        assert!(usizes_are_sorted(&c));

        let mut d = [isize::MIN, 4, -4];
        sort_isizes(&mut d);
        assert_eq!(d, [isize::MIN, -4, 4]);
        assert!(isizes_are_sorted(&d));

        let mut e = [u64::MAX, 1];
        sort_u64s(&mut e);
        assert!(u64s_are_sorted(&e));

        let mut f = [2.5f32, -0.5, f32::NAN, f32::NEG_INFINITY];
        sort_f32s(&mut f);
        assert_eq!(f[..3], [f32::NEG_INFINITY, -0.5, 2.5]);
        assert!(f[3].is_nan());
        assert!(f32s_are_sorted(&f));
        assert!(!f32s_are_sorted(&[f32::NAN, 1.0]));
    }

    #[test]
    fn test_string_and_byte_accessors() {
        let words: Vec<String> = vec!["b".into(), "a".into()];
        assert_eq!(words.str_at(1), "a");
        assert!(words.less(1, 0));

        let rows: Vec<&[u8]> = vec![&b"xy"[..], &b"x"[..]];
        assert_eq!(rows[..].bytes_at(0), b"xy");
        assert!(rows.less(1, 0));
    }

    #[test]
    fn test_sort_by_cached_key_calls_key_once_per_element() {
        let calls = Cell::new(0usize);
        let mut items: Vec<u32> = (0..1000).rev().collect();

        sort_by_cached_key(&mut items, |&v| {
            calls.set(calls.get() + 1);
            v as Key
        });

        assert_eq!(calls.get(), 1000);
        assert_eq!(items, (0..1000).collect::<Vec<u32>>());
    }

    #[test]
    fn test_sort_by_cached_key_with_duplicate_keys() {
        let calls = Cell::new(0usize);
        let mut items: Vec<u32> = (0..1000).map(|i| i % 10).collect();

        sort_by_cached_key(&mut items, |&v| {
            calls.set(calls.get() + 1);
            v as Key
        });

        assert_eq!(calls.get(), 1000);
        let mut expected: Vec<u32> = (0..1000).map(|i| i % 10).collect();
        expected.sort();
        assert_eq!(items, expected);
    }

    #[test]
    fn test_sort_by_key_records() {
        let mut items: Vec<(u16, &str)> = (0..400u16).map(|i| ((i * 37) % 400, "x")).collect();
        sort_by_key(&mut items, |&(k, _)| k as Key);
        assert!(items.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
