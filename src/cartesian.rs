//! Cartesian products of an arbitrary number of sets.

use std::marker::PhantomData;

use tracing::trace;

use crate::enumerator::{Enumerator, Phase, Walk};
use crate::factorial::Overflow;

/// Lazily enumerates the cartesian product of `sets`, one element from each set per result, in
/// nested-loop order (the last set varies fastest).
///
/// The product of no sets is a single empty tuple; the product involving an empty set is empty.
pub fn cartesian<T: Clone, S: AsRef<[T]>>(sets: &[S]) -> Enumerator<Cartesian<T, S>> {
    trace!("cartesian: sets.len: {}", sets.len());
    Enumerator::new(Cartesian::new(sets))
}

/// The number of tuples in the cartesian product of sets with the given cardinalities.
pub fn count_tuples(cardinalities: &[usize]) -> u128 {
    try_count_tuples(cardinalities).unwrap_or_else(|err| panic!("{err}"))
}

pub fn try_count_tuples(cardinalities: &[usize]) -> Result<u128, Overflow> {
    cardinalities.iter().try_fold(1u128, |product, &cardinality| {
        product
            .checked_mul(cardinality as u128)
            .ok_or_else(|| Overflow::of(format!("product of cardinalities {cardinalities:?}")))
    })
}

#[derive(Debug)]
pub struct Cartesian<'a, T, S> {
    sets: &'a [S],
    buffer: Vec<T>,
    cursors: Vec<usize>,
    phase: Phase,
    phantom: PhantomData<T>,
}
impl<'a, T, S: AsRef<[T]>> Cartesian<'a, T, S> {
    pub fn new(sets: &'a [S]) -> Self {
        Self {
            sets,
            buffer: Vec::with_capacity(sets.len()),
            cursors: Vec::with_capacity(sets.len()),
            phase: Phase::Fresh,
            phantom: PhantomData,
        }
    }
}

impl<'a, T: Clone, S: AsRef<[T]>> Walk for Cartesian<'a, T, S> {
    type Item = T;

    fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Exhausted => return false,
            Phase::Fresh => {
                if self.sets.is_empty() {
                    self.phase = Phase::Exhausted;
                    return true;
                }
                self.phase = Phase::Running;
                self.cursors.push(0);
            }
            Phase::Running => {}
        }

        let sets = self.sets;
        while let Some(&cursor) = self.cursors.last() {
            let depth = self.cursors.len() - 1;
            let set = sets[depth].as_ref();
            if cursor < set.len() {
                self.cursors[depth] = cursor + 1;
                self.buffer.truncate(depth);
                self.buffer.push(set[cursor].clone());
                if depth + 1 == sets.len() {
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
