//! # QuickMerge
//!
//! `quickmerge` is a comparison-frugal merge sort. Instead of interleaving two sorted runs
//! element by element, its merge step bisects: it takes the middle element of the larger run,
//! binary searches the smaller run for its place, and rotates the blocks around so the pivot
//! lands in its final position. The two leftover pieces are merged the same way.
//!
//! ## Key Features
//!
//! - **Fewer comparisons on skewed merges**: merging `k` elements into `m` costs
//!   `O(k log(m/k + 1))` comparisons rather than `k + m - 1`.
//! - **Index mapping**: all reordering happens in a permutation held next to the data by
//!   [`PermSet`]. Elements are moved at most once, after the sort, by [`PermSet::rearrange`]
//!   or [`PermSet::into_vec`].
//! - **Constant-space rotations**: blocks are exchanged with mapping swaps only, no buffer.
//! - **Comparison counting**: every sort reports how many comparisons it made.
//!
//! ## Usage
//!
//! ```rust
//! use quickmerge::prelude::*;
//!
//! let mut set = PermSet::new(vec![5, 3, 1, 4, 2]);
//! let comparisons = quick_merge_sort(&mut set);
//!
//! assert!(comparisons > 0);
//! assert_eq!(set.to_string(), "{1, 2, 3, 4, 5}");
//! ```
//!
//! For plain slices, [`quick_merge_sort_mut`] sorts in place and [`quick_merge_indices`]
//! returns the sorting permutation.
//!
//! ```rust
//! use quickmerge::quick_merge_sort_mut;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! quick_merge_sort_mut(&mut data);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ## Stability
//!
//! The sort is **not** stable. A merge may exchange the two runs to keep the larger one first,
//! which reorders equal elements.
//!
//! ## Logging
//!
//! With the `tracing` feature the sorter emits `tracing` events (debug on sort start and
//! finish, trace on run swaps). Without it the logging compiles away.

mod tracing_helpers;

pub mod algo;
pub mod core;
pub mod error;

pub use algo::{
    QuickMerge, quick_merge_indices, quick_merge_sort, quick_merge_sort_mut, quick_merge_sort_stats,
};
pub use crate::core::{PermSet, SortStats};
pub use error::QuickMergeError;

pub mod prelude {
    pub use crate::algo::{QuickMerge, quick_merge_indices, quick_merge_sort, quick_merge_sort_mut};
    pub use crate::core::PermSet;
    pub use crate::error::QuickMergeError;
}
