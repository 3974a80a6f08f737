//! Core types for QuickMerge.
//!
//! This module defines:
//! - [`PermSet`]: fixed storage plus a logical-to-physical index mapping.
//! - [`SortStats`]: counters collected during one sort call.

use crate::error::QuickMergeError;
use cuneiform::cuneiform;
use std::fmt;

/// A fixed-length sequence whose logical order lives in a separate mapping.
///
/// `mapping[i]` is the physical storage slot currently standing at logical
/// position `i`. The sorter only ever swaps mapping entries, so elements are
/// never moved while sorting. [`PermSet::rearrange`] or [`PermSet::into_vec`]
/// materialize the logical order afterwards.
///
/// # Examples
///
/// ```
/// use quickmerge::{PermSet, quick_merge_sort};
///
/// let mut set = PermSet::new(vec![5, 3, 1, 4, 2]);
/// quick_merge_sort(&mut set);
///
/// // Storage is untouched, only the mapping changed.
/// assert_eq!(*set.get(0), 5);
/// assert_eq!(*set.get_logical(0), 1);
///
/// let sorted = set.rearrange();
/// assert_eq!(sorted.into_vec(), vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct PermSet<T> {
    storage: Vec<T>,
    mapping: Vec<usize>,
}

impl<T> PermSet<T> {
    /// Wraps `storage` with an identity mapping.
    pub fn new(storage: Vec<T>) -> Self {
        let mut set = Self {
            storage,
            mapping: Vec::new(),
        };
        set.reset_mapping();
        set
    }

    /// Creates a set of `len` default values.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        (0..len).map(|_| T::default()).collect()
    }

    /// Returns the element in physical slot `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= self.len()`.
    #[inline]
    pub fn get(&self, slot: usize) -> &T {
        &self.storage[slot]
    }

    /// Checked form of [`get`](Self::get).
    pub fn try_get(&self, slot: usize) -> Result<&T, QuickMergeError> {
        self.storage.get(slot).ok_or(QuickMergeError::IndexOutOfBounds {
            index: slot,
            len: self.len(),
        })
    }

    /// Overwrites the element in physical slot `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= self.len()`.
    #[inline]
    pub fn set(&mut self, slot: usize, value: T) {
        self.storage[slot] = value;
    }

    /// Returns the element currently at logical position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get_logical(&self, index: usize) -> &T {
        &self.storage[self.mapping[index]]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Exchanges the mapping entries of logical positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap_mapping(&mut self, i: usize, j: usize) {
        self.mapping.swap(i, j);
    }

    /// Physical slot backing logical position `i`.
    #[inline]
    pub fn mapping(&self, i: usize) -> usize {
        self.mapping[i]
    }

    /// Points logical position `i` at physical slot `slot`.
    ///
    /// This can leave the mapping with duplicates or gaps. The caller must
    /// restore a permutation of `0..len` before the set is read through the
    /// mapping again, see [`is_permutation`](Self::is_permutation).
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn set_mapping(&mut self, i: usize, slot: usize) {
        self.mapping[i] = slot;
    }

    /// Resets the mapping to the identity.
    pub fn reset_mapping(&mut self) {
        self.mapping.clear();
        self.mapping.extend(0..self.storage.len());
    }

    /// The whole mapping, indexed by logical position.
    pub fn mapping_slice(&self) -> &[usize] {
        &self.mapping
    }

    /// Consumes the set and returns its mapping.
    pub fn into_mapping(self) -> Vec<usize> {
        self.mapping
    }

    /// Returns `true` if every slot in `0..len` appears exactly once in the mapping.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.len()];
        self.mapping.iter().all(|&slot| {
            slot < seen.len() && !std::mem::replace(&mut seen[slot], true)
        })
    }

    /// Iterates over the elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.mapping.iter().map(|&slot| &self.storage[slot])
    }

    /// Produces a new set whose storage is physically in logical order.
    ///
    /// The returned set has an identity mapping. `self` is not modified.
    pub fn rearrange(&self) -> PermSet<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the set and returns the elements in logical order.
    ///
    /// Unlike [`rearrange`](Self::rearrange) this needs no `Clone`; the
    /// storage is permuted in place.
    pub fn into_vec(self) -> Vec<T> {
        let PermSet {
            mut storage,
            mapping,
        } = self;
        apply_mapping(&mut storage, mapping);
        storage
    }
}

impl<T> From<Vec<T>> for PermSet<T> {
    fn from(storage: Vec<T>) -> Self {
        Self::new(storage)
    }
}

impl<T> FromIterator<T> for PermSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// Renders the logical order as `{a, b, c}`.
impl<T: fmt::Display> fmt::Display for PermSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

/// Reorders `data` so that `data[i]` becomes the old `data[mapping[i]]`.
///
/// Follows each cycle of the mapping with swaps; `mapping` is consumed as the
/// visited marker.
pub(crate) fn apply_mapping<T>(data: &mut [T], mut mapping: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while mapping[current] != i {
            let next = mapping[current];
            data.swap(current, next);
            mapping[current] = current;
            current = next;
        }
        mapping[current] = current;
    }
}

/// Counters collected by one sort call.
///
/// Cache-line aligned; the sorter bumps these in its innermost loops.
#[cuneiform]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Element comparisons made by the binary searches.
    pub comparisons: usize,
    /// Mapping swaps made by rotations.
    pub swaps: usize,
    /// Non-trivial rotations (both blocks non-empty).
    pub rotations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_identity_mapping() {
        let set = PermSet::new(vec!['c', 'a', 'b']);
        assert_eq!(set.mapping_slice(), &[0, 1, 2]);
        assert!(set.is_permutation());
    }

    #[test]
    fn with_len_uses_defaults() {
        let set: PermSet<u32> = PermSet::with_len(4);
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|&v| v == 0));
    }

    #[test]
    fn swap_mapping_reorders_logical_view_only() {
        let mut set = PermSet::new(vec![10, 20, 30]);
        set.swap_mapping(0, 2);

        assert_eq!(*set.get(0), 10);
        assert_eq!(*set.get_logical(0), 30);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
        assert!(set.is_permutation());
    }

    #[test]
    fn set_mapping_can_break_and_restore_bijection() {
        let mut set = PermSet::new(vec![1, 2, 3]);
        set.set_mapping(0, 1);
        assert!(!set.is_permutation());

        set.set_mapping(1, 0);
        assert!(set.is_permutation());

        set.reset_mapping();
        assert_eq!(set.mapping_slice(), &[0, 1, 2]);
    }

    #[test]
    fn out_of_range_slot_in_mapping_is_not_a_permutation() {
        let mut set = PermSet::new(vec![1, 2]);
        set.set_mapping(1, 7);
        assert!(!set.is_permutation());
    }

    #[test]
    fn rearrange_leaves_source_untouched() {
        let mut set = PermSet::new(vec!["x", "y", "z"]);
        set.swap_mapping(0, 1);
        set.swap_mapping(1, 2);

        let copy = set.rearrange();
        assert_eq!(copy.mapping_slice(), &[0, 1, 2]);
        assert_eq!(copy.get(0), &"y");
        assert_eq!(copy.get(1), &"z");
        assert_eq!(copy.get(2), &"x");

        assert_eq!(set.mapping_slice(), &[1, 2, 0]);
        assert_eq!(set.get(0), &"x");
    }

    #[test]
    fn into_vec_applies_cycles() {
        let mut set = PermSet::new(vec![0, 1, 2, 3, 4, 5]);
        // Two cycles: 0 -> 2 -> 4 -> 0 and 1 <-> 3; 5 fixed.
        for (i, slot) in [2, 3, 4, 1, 0, 5].into_iter().enumerate() {
            set.set_mapping(i, slot);
        }
        assert!(set.is_permutation());
        assert_eq!(set.into_vec(), vec![2, 3, 4, 1, 0, 5]);
    }

    #[test]
    fn try_get_reports_bounds() {
        let set = PermSet::new(vec![1u8]);
        assert_eq!(set.try_get(0), Ok(&1));
        assert_eq!(
            set.try_get(3),
            Err(QuickMergeError::IndexOutOfBounds { index: 3, len: 1 })
        );
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let set = PermSet::new(vec![1, 2]);
        let _ = set.get(2);
    }

    #[test]
    #[should_panic]
    fn swap_mapping_out_of_range_panics() {
        let mut set = PermSet::new(vec![1, 2]);
        set.swap_mapping(0, 5);
    }

    #[test]
    fn display_uses_logical_order() {
        let mut set = PermSet::new(vec![3, 1, 2]);
        set.swap_mapping(0, 1);
        assert_eq!(set.to_string(), "{1, 3, 2}");

        let empty: PermSet<i32> = PermSet::new(vec![]);
        assert_eq!(empty.to_string(), "{}");
    }
}
