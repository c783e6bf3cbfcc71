//! Testing helpers.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Asserts that `expected` and `actual` hold the same results with the same multiplicities,
/// irrespective of order.
pub fn assert_same_members<T: Eq + Hash + Debug>(expected: &[Vec<T>], actual: &[Vec<T>]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    assert_eq!(tally(expected), tally(actual), "members do not match");
}

fn tally<T: Eq + Hash>(results: &[Vec<T>]) -> FxHashMap<&[T], usize> {
    let mut counts = FxHashMap::default();
    for result in results {
        *counts.entry(result.as_slice()).or_insert(0) += 1;
    }
    counts
}
