//! The QuickMerge sort: merge sort whose merge step bisects by rotation.
//!
//! A plain top-down split sorts both halves, then merges them with a
//! "quick-merge":
//! - **Pivot**: take the midpoint of the larger run (the *wedge*).
//! - **Binary search**: find where the pivot belongs in the smaller run (the *split*).
//! - **Rotation**: swap the wedge's upper half with the split's lower part, which
//!   puts the pivot in its final place and leaves two smaller, independent merges.
//!
//! Merging `k` elements into `m` this way costs `O(k log(m/k + 1))` comparisons
//! instead of the `k + m - 1` of a linear merge.
//!
//! Every reordering goes through [`PermSet::swap_mapping`]; element storage is
//! never touched. The main entry points are [`quick_merge_sort`],
//! [`quick_merge_indices`] and [`quick_merge_sort_mut`].

use crate::core::{PermSet, SortStats, apply_mapping};
use crate::error::QuickMergeError;
use crate::tracing_helpers::{debug_log, trace_log};

/// Sorts `set` by rewriting its mapping and returns the number of comparisons.
///
/// # Examples
///
/// ```
/// use quickmerge::{PermSet, quick_merge_sort};
///
/// let mut set = PermSet::new(vec![8, 7, 6, 5, 4, 3, 2, 1]);
/// let comparisons = quick_merge_sort(&mut set);
///
/// assert!(comparisons > 0);
/// assert_eq!(set.into_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn quick_merge_sort<T: Ord>(set: &mut PermSet<T>) -> usize {
    quick_merge_sort_stats(set).comparisons
}

/// Like [`quick_merge_sort`], but returns all counters of the call.
pub fn quick_merge_sort_stats<T: Ord>(set: &mut PermSet<T>) -> SortStats {
    let mut sorter = QuickMerge::new(set);
    sorter.sort();
    let stats = sorter.stats();

    debug_log!(
        len = sorter.set.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        rotations = stats.rotations,
        "quick-merge sort finished"
    );

    stats
}

/// Returns the indices that order `data`, leaving `data` untouched.
///
/// # Examples
///
/// ```
/// use quickmerge::quick_merge_indices;
///
/// let data = vec!["banana", "apple", "cherry"];
/// assert_eq!(quick_merge_indices(&data), vec![1, 0, 2]);
/// ```
pub fn quick_merge_indices<T: Ord>(data: &[T]) -> Vec<usize> {
    let mut set: PermSet<&T> = data.iter().collect();
    quick_merge_sort(&mut set);
    set.into_mapping()
}

/// Sorts a slice in place.
///
/// Computes the order with [`quick_merge_indices`], then applies it with
/// swaps, so each element moves along its cycle at most once.
///
/// # Examples
///
/// ```
/// use quickmerge::quick_merge_sort_mut;
///
/// let mut data = vec![5, 3, 1, 4, 2];
/// quick_merge_sort_mut(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn quick_merge_sort_mut<T: Ord>(data: &mut [T]) {
    let mapping = quick_merge_indices(data);
    apply_mapping(data, mapping);
}

/// A sorter bound to one [`PermSet`] for the duration of a sort.
///
/// Ranges are half-open: `(start, mid, end)` names the blocks `start..mid`
/// and `mid..end`. The checked methods validate their bounds and are meant
/// for driving single merge or rotation steps; [`sort`](Self::sort) runs the
/// whole algorithm.
pub struct QuickMerge<'a, T> {
    set: &'a mut PermSet<T>,
    stats: SortStats,
    // Pending merges, reused across merge calls.
    pending: Vec<(usize, usize, usize)>,
}

impl<'a, T: Ord> QuickMerge<'a, T> {
    pub fn new(set: &'a mut PermSet<T>) -> Self {
        Self {
            set,
            stats: SortStats::default(),
            pending: Vec::new(),
        }
    }

    /// Counters accumulated by this sorter so far.
    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// Sorts the whole set and returns the comparisons made by this call.
    pub fn sort(&mut self) -> usize {
        debug_log!(len = self.set.len(), "quick-merge sort started");
        let comparisons = self.sort_range(0, self.set.len());
        self.stats.comparisons += comparisons;
        debug_assert!(self.set.is_permutation());
        comparisons
    }

    /// Merges the sorted runs `start..mid` and `mid..end`.
    ///
    /// Returns the comparisons made. Either run being empty is a no-op.
    /// Both runs must already be sorted; that is not checked.
    pub fn merge_range(
        &mut self,
        start: usize,
        mid: usize,
        end: usize,
    ) -> Result<usize, QuickMergeError> {
        self.check_range(start, mid, end)?;
        let comparisons = self.merge(start, mid, end);
        self.stats.comparisons += comparisons;
        Ok(comparisons)
    }

    /// Exchanges the blocks `start..mid` and `mid..end` in the mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickmerge::{PermSet, QuickMerge};
    ///
    /// let mut set = PermSet::new(vec![2, 7, 9, 4, 3, 6, 5, 1, 8, 10]);
    /// QuickMerge::new(&mut set).rotate_in_place(0, 6, 10).unwrap();
    ///
    /// let rotated: Vec<i32> = set.iter().copied().collect();
    /// assert_eq!(rotated, vec![5, 1, 8, 10, 2, 7, 9, 4, 3, 6]);
    /// ```
    pub fn rotate_in_place(
        &mut self,
        start: usize,
        mid: usize,
        end: usize,
    ) -> Result<(), QuickMergeError> {
        self.check_range(start, mid, end)?;
        self.rotate(start, mid, end);
        Ok(())
    }

    /// Finds where the element at logical `query` belongs in the sorted range
    /// `start..end`.
    ///
    /// Returns the first index whose element is not less than the query, and
    /// the number of comparisons made.
    pub fn binary_search_insertion_point(
        &mut self,
        query: usize,
        start: usize,
        end: usize,
    ) -> Result<(usize, usize), QuickMergeError> {
        if query >= self.set.len() {
            return Err(QuickMergeError::IndexOutOfBounds {
                index: query,
                len: self.set.len(),
            });
        }
        self.check_range(start, start, end)?;
        let (insertion, comparisons) = self.search(query, start, end);
        self.stats.comparisons += comparisons;
        Ok((insertion, comparisons))
    }

    fn check_range(&self, start: usize, mid: usize, end: usize) -> Result<(), QuickMergeError> {
        if start > mid || mid > end {
            return Err(QuickMergeError::InvalidRange { start, mid, end });
        }
        if end > self.set.len() {
            return Err(QuickMergeError::IndexOutOfBounds {
                index: end - 1,
                len: self.set.len(),
            });
        }
        Ok(())
    }

    fn sort_range(&mut self, start: usize, end: usize) -> usize {
        if end - start < 2 {
            return 0;
        }

        // Left half is the smaller one on odd lengths.
        let mid = start + (end - start) / 2;
        self.sort_range(start, mid) + self.sort_range(mid, end) + self.merge(start, mid, end)
    }

    /// Quick-merge of `start..mid` (wedge) and `mid..end` (split).
    ///
    /// Each step places one pivot and leaves two sub-merges over disjoint
    /// ranges, which are queued instead of recursed into.
    fn merge(&mut self, start: usize, mid: usize, end: usize) -> usize {
        let mut pending = std::mem::take(&mut self.pending);
        pending.push((start, mid, end));

        let mut comparisons = 0;
        while let Some((start, mut mid, end)) = pending.pop() {
            if start == mid || mid == end {
                continue;
            }

            // The wedge must be at least as large as the split.
            if end - mid > mid - start {
                trace_log!(start, mid, end, "split larger than wedge, swapping runs");
                self.rotate(start, mid, end);
                mid = start + (end - mid);
            }

            let query = start + (mid - 1 - start) / 2;
            let (insertion, probes) = self.search(query, mid, end);
            comparisons += probes;

            // Split elements strictly below the pivot.
            let rank = insertion - mid;
            self.rotate(query, mid, insertion);

            // Pivot now sits at `query + rank` for good.
            pending.push((start, query, query + rank));
            pending.push((query + rank + 1, mid + rank, end));
        }

        self.pending = pending;
        comparisons
    }

    fn search(&self, query: usize, start: usize, end: usize) -> (usize, usize) {
        let pivot = self.set.get_logical(query);
        let mut low = start;
        let mut high = end;
        let mut comparisons = 0;

        while low < high {
            let candidate = low + (high - low - 1) / 2;
            // Ties go left.
            if pivot > self.set.get_logical(candidate) {
                low = candidate + 1;
            } else {
                high = candidate;
            }
            comparisons += 1;
        }

        (low, comparisons)
    }

    /// Block swap by repeated exchange: the smaller block is swapped against
    /// as many equal-length chunks of the larger block as fit, then the
    /// leftover tail is handled the same way.
    fn rotate(&mut self, mut start: usize, mut mid: usize, mut end: usize) {
        if start == mid || mid == end {
            return;
        }
        self.stats.rotations += 1;

        while start < mid && mid < end {
            let left = mid - start;
            let right = end - mid;

            let shifted = if left <= right {
                let shifted = right / left * left;
                for i in 0..shifted {
                    self.set.swap_mapping(start + i, mid + i);
                }
                start += shifted;
                mid = end - right % left;
                shifted
            } else {
                let shifted = left / right * right;
                for i in 1..=shifted {
                    self.set.swap_mapping(end - i, mid - i);
                }
                end -= shifted;
                mid = start + left % right;
                shifted
            };

            self.stats.swaps += shifted;
        }
    }
}
