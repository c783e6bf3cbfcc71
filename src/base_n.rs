//! Base-_N_ sequences: digit strings over a set of _N_ elements, with repetition.

use tracing::trace;

use crate::enumerator::{Enumerator, Phase, Walk};

/// Lazily enumerates all `set.len()^size` sequences of length `size`, treating `set` as the
/// digits of a base-_N_ numeral. The last position varies fastest.
pub fn base_n<T: Clone>(set: &[T], size: usize) -> Enumerator<BaseN<T>> {
    trace!("base_n: set.len: {}, size: {size}", set.len());
    Enumerator::new(BaseN::new(set, size))
}

/// [base_n] with `size` equal to the number of elements.
pub fn base_n_all<T: Clone>(set: &[T]) -> Enumerator<BaseN<T>> {
    base_n(set, set.len())
}

/// An unbounded stream of base-_N_ sequences: every sequence of length 1, then every sequence of
/// length 2, and so on. It never reports exhaustion unless `set` is empty, in which case there is
/// nothing to produce. Pace it with [pull](Enumerator::pull) or [take](Iterator::take).
pub fn base_n_unbounded<T: Clone>(set: &[T]) -> Enumerator<BaseNUnbounded<T>> {
    trace!("base_n_unbounded: set.len: {}", set.len());
    Enumerator::new(BaseNUnbounded::new(set))
}

#[derive(Debug)]
pub struct BaseN<'a, T> {
    set: &'a [T],
    size: usize,
    buffer: Vec<T>,
    cursors: Vec<usize>,
    phase: Phase,
}
impl<'a, T> BaseN<'a, T> {
    pub fn new(set: &'a [T], size: usize) -> Self {
        // no digits means no results, whatever the size
        let capacity = if set.is_empty() { 0 } else { size };
        Self {
            set,
            size,
            buffer: Vec::with_capacity(capacity),
            cursors: Vec::with_capacity(capacity),
            phase: Phase::Fresh,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rewinds to the start of the sequences of length `size`, keeping allocated buffers.
    fn restart(&mut self, size: usize) {
        self.size = size;
        self.buffer.clear();
        self.cursors.clear();
        self.phase = Phase::Fresh;
    }
}

impl<'a, T: Clone> Walk for BaseN<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Exhausted => return false,
            Phase::Fresh => {
                if self.size == 0 {
                    self.phase = Phase::Exhausted;
                    return true;
                }
                self.phase = Phase::Running;
                self.cursors.push(0);
            }
            Phase::Running => {}
        }

        let set = self.set;
        while let Some(&cursor) = self.cursors.last() {
            let depth = self.cursors.len() - 1;
            if cursor < set.len() {
                self.cursors[depth] = cursor + 1;
                self.buffer.truncate(depth);
                self.buffer.push(set[cursor].clone());
                if depth + 1 == self.size {
                    return true;
                }
                self.cursors.push(0);
            } else {
                self.cursors.pop();
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

#[derive(Debug)]
pub struct BaseNUnbounded<'a, T> {
    digits: BaseN<'a, T>,
}
impl<'a, T> BaseNUnbounded<'a, T> {
    pub fn new(set: &'a [T]) -> Self {
        Self {
            digits: BaseN::new(set, 1),
        }
    }
}

impl<'a, T: Clone> Walk for BaseNUnbounded<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.digits.set.is_empty() {
            return false;
        }
        while !self.digits.advance() {
            let size = self.digits.size() + 1;
            self.digits.restart(size);
        }
        true
    }

    #[inline]
    fn current(&self) -> &[T] {
        self.digits.current()
    }
}
