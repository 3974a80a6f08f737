//! Shared test helpers.
//!
//! ```bash
//! RUST_LOG=quickmerge=trace cargo test --features tracing -- --nocapture
//! ```

#![allow(dead_code)]

use quickmerge::PermSet;
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber filtered by `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Logical contents of `set`, in order.
pub fn logical<T: Clone>(set: &PermSet<T>) -> Vec<T> {
    set.iter().cloned().collect()
}

/// Reference rotation: `v[start..end]` becomes `v[mid..end] ++ v[start..mid]`.
pub fn naive_rotate<T: Clone>(v: &[T], start: usize, mid: usize, end: usize) -> Vec<T> {
    let mut out = v[..start].to_vec();
    out.extend_from_slice(&v[mid..end]);
    out.extend_from_slice(&v[start..mid]);
    out.extend_from_slice(&v[end..]);
    out
}
