//! Precomputed key index for collections with expensive keys.
//!
//! An [`Index`] pairs a freshly allocated key array with the collection being
//! sorted. Keys are computed once through [`IndexBuilder::set_keys`], and every
//! exchange moves a key together with its element, so the radix engine reads
//! keys with a plain array lookup.

use crate::algo::sort;
use crate::core::{BytesAccessor, IndexBuilder, Sequence, Sortable, StrAccessor};
use crate::key::{Key, prefix_key, str_key};
use log::debug;

/// A collection paired with one precomputed [`Key`] per element.
///
/// `keys[i]` always holds the key of the element currently at position `i`.
/// The only way to reorder an index is [`Sequence::swap`], which exchanges
/// both the keys and the underlying elements.
pub struct Index<'a, B: IndexBuilder + ?Sized> {
    keys: Vec<Key>,
    data: &'a mut B,
}

impl<'a, B: IndexBuilder + ?Sized> Index<'a, B> {
    /// Allocates the key array and fills it from `data`.
    pub fn new(data: &'a mut B) -> Self {
        let len = data.len();
        let mut keys = vec![0; len];
        data.set_keys(&mut keys, 0);
        debug!("built sort index over {len} elements");
        Self { keys, data }
    }

    /// The keys in their current order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }
}

impl<B: IndexBuilder + ?Sized> Sequence for Index<'_, B> {
    fn len(&self) -> usize {
        self.keys.len()
    }

    /// Compares by key, falling back to the collection's own order for equal keys.
    fn less(&self, i: usize, j: usize) -> bool {
        let (ki, kj) = (self.keys[i], self.keys[j]);
        ki < kj || (ki == kj && self.data.less(i, j))
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        self.data.swap(i, j);
    }
}

impl<B: IndexBuilder + ?Sized> Sortable for Index<'_, B> {
    #[inline(always)]
    fn key(&self, i: usize) -> Key {
        self.keys[i]
    }
}

/// Sorts `data` using a temporary array of precomputed keys.
///
/// Costs one [`Key`] of memory per element. [`Sequence::less`] breaks ties
/// between equal keys.
pub fn sort_index<B: IndexBuilder + ?Sized>(data: &mut B) {
    let mut index = Index::new(data);
    sort(&mut index);
}

/// Sorts a collection of strings by their bytes, caching an 8-byte prefix per element.
///
/// # Examples
///
/// ```
/// use keyradix::sort_strings;
///
/// let mut fruit = vec!["banana", "apple", "apple", "band"];
/// sort_strings(&mut fruit);
///
/// assert_eq!(fruit, vec!["apple", "apple", "banana", "band"]);
/// ```
pub fn sort_strings<S: StrAccessor + ?Sized>(data: &mut S) {
    sort_index(&mut StrIndexBuilder(data));
}

/// Sorts a collection of byte sequences, caching an 8-byte prefix per element.
pub fn sort_bytes<S: BytesAccessor + ?Sized>(data: &mut S) {
    sort_index(&mut BytesIndexBuilder(data));
}

/// Number of keys `set_keys` should write for a collection of `len` elements.
#[inline]
fn fill_len(keys: &[Key], len: usize, offset: usize) -> usize {
    keys.len().min(len.saturating_sub(offset))
}

struct StrIndexBuilder<'a, S: ?Sized>(&'a mut S);

impl<S: StrAccessor + ?Sized> Sequence for StrIndexBuilder<'_, S> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
}

impl<S: StrAccessor + ?Sized> IndexBuilder for StrIndexBuilder<'_, S> {
    fn set_keys(&self, keys: &mut [Key], offset: usize) {
        let n = fill_len(keys, self.len(), offset);
        keys[..n]
            .iter_mut()
            .zip(offset..)
            .for_each(|(slot, i)| *slot = str_key(self.0.str_at(i)));
    }
}

struct BytesIndexBuilder<'a, S: ?Sized>(&'a mut S);

impl<S: BytesAccessor + ?Sized> Sequence for BytesIndexBuilder<'_, S> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
}

impl<S: BytesAccessor + ?Sized> IndexBuilder for BytesIndexBuilder<'_, S> {
    fn set_keys(&self, keys: &mut [Key], offset: usize) {
        let n = fill_len(keys, self.len(), offset);
        keys[..n]
            .iter_mut()
            .zip(offset..)
            .for_each(|(slot, i)| *slot = prefix_key(self.0.bytes_at(i)));
    }
}
