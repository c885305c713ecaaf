//! Reference fixtures and conformance checks for collframe.
//!
//! The library crates ship traits only. This crate provides two small
//! `Vec`-backed collections with opposite duplicate policies so the contracts
//! can be exercised end to end:
//!
//! - [`VecBag<T>`] — insertion-ordered, duplicates permitted
//! - [`DistinctSet<T>`] — insertion-ordered, duplicates rejected
//!
//! [`conformance`] holds law checks that hold for any implementor, written
//! to be driven from proptest.

pub mod conformance;
mod distinct_set;
mod vec_bag;

pub use distinct_set::DistinctSet;
pub use vec_bag::VecBag;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
