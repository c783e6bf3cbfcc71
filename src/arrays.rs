//! Utilities for working with slices in place.

use tinyrand::Rand;
use tracing::warn;

/// Swaps the elements at positions `i` and `j`, returning the slice for chaining.
///
/// A position past the end of the slice is a caller error but not a fatal one: a warning is
/// logged and the slice is left untouched.
#[inline]
pub fn swap<T>(items: &mut [T], i: usize, j: usize) -> &mut [T] {
    let len = items.len();
    if i >= len || j >= len {
        warn!("swapping elements past the end of a slice (i: {i}, j: {j}, len: {len}); ignored");
        return items;
    }
    items.swap(i, j);
    items
}

/// Fisher–Yates shuffle in place. Every ordering is equally likely, given a uniform `rand`.
pub fn shuffle<'a, T>(items: &'a mut [T], rand: &mut impl Rand) -> &'a mut [T] {
    for i in (1..items.len()).rev() {
        let j = rand.next_lim_usize(i + 1);
        swap(items, i, j);
    }
    items
}
