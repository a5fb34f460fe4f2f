//! Core traits for keyradix.
//!
//! This module defines the capability contract a collection has to satisfy
//! to be sorted:
//! - [`Sequence`]: length, secondary ordering and in-place exchange.
//! - [`Sortable`]: a [`Sequence`] that can also produce a 64-bit [`Key`] per element.
//! - [`IndexBuilder`]: a [`Sequence`] that fills a side array of keys in one go.
//! - [`StrAccessor`] / [`BytesAccessor`]: collections ordered by a string or
//!   byte-sequence key, for which a prefix [`Key`] is derived automatically.

use crate::key::Key;

/// An indexable collection that can be reordered in place.
///
/// This is the comparison half of the contract. `less` must be a strict weak
/// order, and it must agree with [`Sortable::key`] whenever keys differ.
pub trait Sequence {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports whether the element at `i` sorts before the element at `j`.
    ///
    /// The radix engine only relies on this to break ties between equal keys.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// A collection that can be radix sorted with [`sort`](crate::algo::sort).
///
/// # Examples
///
/// ```
/// use keyradix::{int64_key, sort, Key, Sequence, Sortable};
///
/// struct Event {
///     at: i64,
///     name: &'static str,
/// }
///
/// struct Timeline(Vec<Event>);
///
/// impl Sequence for Timeline {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn less(&self, i: usize, j: usize) -> bool {
///         let (a, b) = (&self.0[i], &self.0[j]);
///         (a.at, a.name) < (b.at, b.name)
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.0.swap(i, j);
///     }
/// }
///
/// impl Sortable for Timeline {
///     fn key(&self, i: usize) -> Key {
///         int64_key(self.0[i].at)
///     }
/// }
///
/// let mut timeline = Timeline(vec![
///     Event { at: 3, name: "stop" },
///     Event { at: -1, name: "boot" },
///     Event { at: 3, name: "log" },
/// ]);
/// sort(&mut timeline);
///
/// let names: Vec<_> = timeline.0.iter().map(|e| e.name).collect();
/// assert_eq!(names, vec!["boot", "log", "stop"]);
/// ```
pub trait Sortable: Sequence {
    /// Returns the ordering key of the element at `i`.
    ///
    /// If `key(i) < key(j)` the element at `i` must sort before the one at `j`.
    fn key(&self, i: usize) -> Key;
}

/// A collection whose keys are worth computing once up front.
///
/// Implement this when a key is expensive to derive (string prefixes,
/// pointer-chasing into records) and sort with
/// [`sort_index`](crate::index::sort_index), which allocates one [`Key`] per
/// element.
pub trait IndexBuilder: Sequence {
    /// Fills `keys` with the keys of the elements starting at `offset`.
    ///
    /// Writes `keys[..min(keys.len(), self.len() - offset)]`.
    fn set_keys(&self, keys: &mut [Key], offset: usize);
}

/// A collection ordered by a string per element.
pub trait StrAccessor: Sequence {
    /// Returns the string at `index`.
    fn str_at(&self, index: usize) -> &str;
}

/// A collection ordered by a byte sequence per element.
pub trait BytesAccessor: Sequence {
    /// Returns the bytes at `index`.
    fn bytes_at(&self, index: usize) -> &[u8];
}
