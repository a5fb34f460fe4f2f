//! # keyradix
//!
//! `keyradix` sorts arbitrary indexable collections in place with a hybrid
//! most-significant-digit radix sort. Each element supplies a 64-bit [`Key`];
//! elements with equal keys are ordered by a comparison the collection
//! supplies as well.
//!
//! ## Key Features
//!
//! - **Order-preserving keys**: [`int64_key`], [`float64_key`] (NaNs last),
//!   [`prefix_key`] and friends map typed values onto `u64`s whose unsigned
//!   order matches the value order.
//! - **Adaptive digit selection**: a sampled estimate picks the first key digit
//!   that actually varies, and each pass re-checks it against the exact key
//!   range, so constant leading bits never cost a pass.
//! - **In-place**: buckets are formed by swapping through the [`Sequence`]
//!   trait. The only scratch memory is one 256-entry counter array per call.
//! - **Cached prefixes**: [`sort_strings`], [`sort_bytes`] and [`sort_index`]
//!   compute every key once into a side array that moves in lockstep with the
//!   data.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Slices and `Vec`s of primitive numbers sort directly; strings and byte
//! sequences go through the cached-prefix path.
//!
//! ```rust
//! use keyradix::{sort, sort_strings};
//!
//! let mut numbers = vec![5i32, -3, 0, 5, -3];
//! sort(&mut numbers);
//! assert_eq!(numbers, vec![-3, -3, 0, 5, 5]);
//!
//! let mut words = vec!["banana", "apple", "apple", "band"];
//! sort_strings(&mut words);
//! assert_eq!(words, vec!["apple", "apple", "banana", "band"]);
//! ```
//!
//! ### Custom Types
//!
//! Implement [`Sequence`] and [`Sortable`] for your collection, or
//! [`Sequence`] and [`IndexBuilder`] if its keys are expensive to compute.
//!
//! ```rust
//! use keyradix::{prefix_key, sort_index, IndexBuilder, Key, Sequence};
//!
//! struct Users(Vec<String>);
//!
//! impl Sequence for Users {
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn less(&self, i: usize, j: usize) -> bool {
//!         self.0[i].to_lowercase() < self.0[j].to_lowercase()
//!     }
//!
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.0.swap(i, j);
//!     }
//! }
//!
//! impl IndexBuilder for Users {
//!     fn set_keys(&self, keys: &mut [Key], offset: usize) {
//!         for (slot, name) in keys.iter_mut().zip(self.0.iter().skip(offset)) {
//!             *slot = prefix_key(name.to_lowercase().as_bytes());
//!         }
//!     }
//! }
//!
//! let mut users = Users(vec!["bob".into(), "Alice".into(), "carol".into()]);
//! sort_index(&mut users);
//! assert_eq!(users.0, vec!["Alice", "bob", "carol"]);
//! ```
//!
//! ## Checking implementations
//!
//! [`check`] and [`verify`] walk a sorted collection and report whether its
//! `less` and `key` disagree. They never run as part of a sort.
//!
//! ## Performance Characteristics
//!
//! - **Passes**: at most one per varying key byte, so at most 8 over any element.
//! - **Fallback**: ranges under [`SORT_CUTOFF`] elements, ranges of equal keys and
//!   ties left after the last byte are finished by an in-place introsort.
//! - **Memory**: no allocation for [`sort`]; one `u64` per element for the
//!   index-based entry points.
//! - **Not stable**: equal elements may be reordered.

pub mod algo;
pub mod check;
pub mod core;
mod fallback;
pub mod index;
pub mod key;
pub mod slices;

pub use algo::{SORT_CUTOFF, sort};
pub use check::{OrderError, check, is_sorted, verify};
pub use crate::core::{BytesAccessor, IndexBuilder, Sequence, Sortable, StrAccessor};
pub use index::{Index, sort_bytes, sort_index, sort_strings};
pub use key::{
    Key, float32_key, float32_less, float64_key, float64_less, int32_key, int64_key, prefix_key,
    str_key, uint_key,
};
pub use slices::{
    f32s_are_sorted, f64s_are_sorted, i32s_are_sorted, i64s_are_sorted, isizes_are_sorted,
    sort_by_cached_key, sort_by_key, sort_f32s, sort_f64s, sort_i32s, sort_i64s, sort_isizes,
    sort_u32s, sort_u64s, sort_usizes, u32s_are_sorted, u64s_are_sorted, usizes_are_sorted,
};

pub mod prelude {
    pub use crate::algo::sort;
    pub use crate::check::{check, is_sorted, verify};
    pub use crate::core::{BytesAccessor, IndexBuilder, Sequence, Sortable, StrAccessor};
    pub use crate::index::{sort_bytes, sort_index, sort_strings};
    pub use crate::key::Key;
    pub use crate::slices::{sort_by_cached_key, sort_by_key};
}
