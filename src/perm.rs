//! Permutations: ordered, non-repeating selections of `size` elements from a set.
//!
//! Two algorithms are used, selected by whether every element is taken:
//!
//! * [Partial] handles `size < set.len()` by backtracking over a bitmap of used positions.
//! * [Full] handles `size == set.len()` by swapping elements within a scratch buffer. Each
//!   level of the walk swaps its position with every later position in turn and swaps back on
//!   the way out, so a walk that runs to completion leaves the buffer in its original order.
//!
//! Both produce the same set of orderings for a full-size selection, but not in the same sequence.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::arrays;
use crate::enumerator::{Enumerator, Phase, Walk};

/// Lazily enumerates the `size`-permutations of `set`.
///
/// A full-size selection copies `set` into an owned scratch buffer once; see
/// [permutations_in_place] for the zero-copy alternative. A `size` of 0 produces a single empty
/// result; a `size` greater than `set.len()` produces none.
pub fn permutations<T: Clone>(set: &[T], size: usize) -> Enumerator<Permutations<T>> {
    trace!("permutations: set.len: {}, size: {size}", set.len());
    let walk = if size == set.len() {
        Permutations::Full(Full::new(Scratch::Owned(set.to_vec())))
    } else {
        Permutations::Partial(Partial::new(set, size))
    };
    Enumerator::new(walk)
}

/// [permutations] of every element.
pub fn permutations_all<T: Clone>(set: &[T]) -> Enumerator<Permutations<T>> {
    permutations(set, set.len())
}

/// Enumerates every full permutation of `set` by swapping its elements in place, without copying.
///
/// In [Shared](crate::output::OutputMode::Shared) mode each result is `set` itself. Running the
/// enumeration to exhaustion restores the original order; abandoning it early leaves `set`
/// permuted.
///
/// The enumeration holds the only mutable borrow of `set` for its lifetime, so two in-place
/// enumerations cannot be interleaved over the same slice.
pub fn permutations_in_place<T: Clone>(set: &mut [T]) -> Enumerator<Permutations<T>> {
    trace!("permutations_in_place: set.len: {}", set.len());
    Enumerator::new(Permutations::Full(Full::new(Scratch::Borrowed(set))))
}

#[derive(Debug)]
pub enum Permutations<'a, T> {
    Partial(Partial<'a, T>),
    Full(Full<'a, T>),
}

impl<'a, T: Clone> Walk for Permutations<'a, T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> bool {
        match self {
            Permutations::Partial(partial) => partial.advance(),
            Permutations::Full(full) => full.advance(),
        }
    }

    #[inline]
    fn current(&self) -> &[T] {
        match self {
            Permutations::Partial(partial) => partial.current(),
            Permutations::Full(full) => full.current(),
        }
    }
}

/// Backtracking over unused positions. Valid for any `size`, including `set.len()`.
#[derive(Debug)]
pub struct Partial<'a, T> {
    set: &'a [T],
    size: usize,
    buffer: Vec<T>,
    cursors: Vec<usize>,
    chosen: Vec<usize>,
    used: Vec<bool>,
    phase: Phase,
}
impl<'a, T> Partial<'a, T> {
    pub fn new(set: &'a [T], size: usize) -> Self {
        Self {
            set,
            size,
            buffer: Vec::with_capacity(size.min(set.len())),
            cursors: Vec::with_capacity(size.min(set.len())),
            chosen: Vec::with_capacity(size.min(set.len())),
            used: vec![false; set.len()],
            phase: Phase::Fresh,
        }
    }
}

impl<'a, T: Clone> Walk for Partial<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Exhausted => return false,
            Phase::Fresh => {
                if self.size == 0 {
                    self.phase = Phase::Exhausted;
                    return true;
                }
                if self.size > self.set.len() {
                    self.phase = Phase::Exhausted;
                    return false;
                }
                self.phase = Phase::Running;
                self.cursors.push(0);
            }
            Phase::Running => {}
        }

        let set = self.set;
        while let Some(&cursor) = self.cursors.last() {
            let depth = self.cursors.len() - 1;
            if self.chosen.len() > depth {
                if let Some(released) = self.chosen.pop() {
                    self.used[released] = false;
                }
            }

            let used = &self.used;
            match (cursor..set.len()).find(|&index| !used[index]) {
                Some(index) => {
                    self.cursors[depth] = index + 1;
                    self.used[index] = true;
                    self.chosen.push(index);
                    self.buffer.truncate(depth);
                    self.buffer.push(set[index].clone());
                    if depth + 1 == self.size {
                        return true;
                    }
                    self.cursors.push(0);
                }
                None => {
                    self.cursors.pop();
                }
            }
        }
        self.phase = Phase::Exhausted;
        false
    }

    #[inline]
    fn current(&self) -> &[T] {
        &self.buffer
    }
}

/// Working storage for [Full]: an owned copy of the input, or the caller's slice itself.
#[derive(Debug)]
pub enum Scratch<'a, T> {
    Owned(Vec<T>),
    Borrowed(&'a mut [T]),
}

impl<'a, T> Deref for Scratch<'a, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        match self {
            Scratch::Owned(owned) => owned,
            Scratch::Borrowed(borrowed) => borrowed,
        }
    }
}

impl<'a, T> DerefMut for Scratch<'a, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Scratch::Owned(owned) => owned,
            Scratch::Borrowed(borrowed) => borrowed,
        }
    }
}

/// Full permutations by swapping within the scratch buffer, which doubles as the output buffer.
#[derive(Debug)]
pub struct Full<'a, T> {
    scratch: Scratch<'a, T>,
    cursors: Vec<usize>,
    swapped: Vec<usize>,
    phase: Phase,
}
impl<'a, T> Full<'a, T> {
    pub fn new(scratch: Scratch<'a, T>) -> Self {
        let size = scratch.len();
        Self {
            scratch,
            cursors: Vec::with_capacity(size),
            swapped: Vec::with_capacity(size),
            phase: Phase::Fresh,
        }
    }

    /// Recovers the scratch buffer, e.g., to inspect its order after abandoning the walk.
    pub fn into_scratch(self) -> Scratch<'a, T> {
        self.scratch
    }
}

impl<'a, T> Walk for Full<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        let size = self.scratch.len();
        match self.phase {
            Phase::Exhausted => return false,
            Phase::Fresh => {
                if size == 0 {
                    self.phase = Phase::Exhausted;
                    return true;
                }
                self.phase = Phase::Running;
                self.cursors.push(0);
            }
            Phase::Running => {}
        }

        while let Some(&cursor) = self.cursors.last() {
            let depth = self.cursors.len() - 1;
            if self.swapped.len() > depth {
                if let Some(swapped) = self.swapped.pop() {
                    arrays::swap(&mut self.scratch, depth, swapped);
                }
            }

            if cursor < size {
                self.cursors[depth] = cursor + 1;
                arrays::swap(&mut self.scratch, depth, cursor);
                self.swapped.push(cursor);
                if depth + 1 == size {
                    return true;
                }
                self.cursors.push(depth + 1);
            } else {
                self.cursors.pop();
            }
        }
        self.phase = Phase::Exhausted;
        false
    }

    #[inline]
    fn current(&self) -> &[T] {
        &self.scratch
    }
}
