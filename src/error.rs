//! Error type for checked container and sorter operations.

use std::fmt;

/// Misuse of a [`PermSet`](crate::PermSet) or [`QuickMerge`](crate::QuickMerge).
///
/// Both variants describe caller bugs. The panicking accessors treat them as
/// fatal; the `try_*` and checked sorter methods hand them back instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickMergeError {
    /// An index outside `0..len`.
    IndexOutOfBounds { index: usize, len: usize },

    /// Range bounds that are not ordered `start <= mid <= end`.
    InvalidRange { start: usize, mid: usize, end: usize },
}

impl fmt::Display for QuickMergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }

            Self::InvalidRange { start, mid, end } => {
                write!(f, "invalid range: start {start}, mid {mid}, end {end}")
            }
        }
    }
}

impl std::error::Error for QuickMergeError {}
