//! Subsets of every size: the power set, and every ordering of every subset.

use tracing::trace;

use crate::enumerator::{Enumerator, Phase, Walk};

/// Lazily enumerates all `2^n` subsets of `set`, each in increasing position order.
///
/// The walk produces a subset on entering each node of the search tree, before descending, so the
/// empty set comes first and each subset is immediately followed by its extensions:
/// `[], [a], [a, b], [a, b, c], [a, c], [b], [b, c], [c]`.
pub fn power_set<T: Clone>(set: &[T]) -> Enumerator<PowerSet<T>> {
    trace!("power_set: set.len: {}", set.len());
    Enumerator::new(PowerSet::new(set))
}

/// Lazily enumerates every subset of `set` in every order: all `P(n, k)` arrangements for each
/// `k` in `0..=n`, starting with the empty arrangement.
pub fn permutations_of_combinations<T: Clone>(
    set: &[T],
) -> Enumerator<PermutationCombinations<T>> {
    trace!("permutations_of_combinations: set.len: {}", set.len());
    Enumerator::new(PermutationCombinations::new(set))
}

#[derive(Debug)]
pub struct PowerSet<'a, T> {
    set: &'a [T],
    buffer: Vec<T>,
    cursors: Vec<usize>,
    phase: Phase,
}
impl<'a, T> PowerSet<'a, T> {
    pub fn new(set: &'a [T]) -> Self {
        Self {
            set,
            buffer: Vec::with_capacity(set.len()),
            cursors: Vec::with_capacity(set.len() + 1),
            phase: Phase::Fresh,
        }
    }
}

impl<'a, T: Clone> Walk for PowerSet<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Exhausted => return false,
            Phase::Fresh => {
                self.phase = Phase::Running;
                self.cursors.push(0);
                return true;
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
                self.cursors.push(cursor + 1);
                return true;
            }
            self.cursors.pop();
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
pub struct PermutationCombinations<'a, T> {
    set: &'a [T],
    buffer: Vec<T>,
    cursors: Vec<usize>,
    chosen: Vec<usize>,
    used: Vec<bool>,
    phase: Phase,
}
impl<'a, T> PermutationCombinations<'a, T> {
    pub fn new(set: &'a [T]) -> Self {
        Self {
            set,
            buffer: Vec::with_capacity(set.len()),
            cursors: Vec::with_capacity(set.len() + 1),
            chosen: Vec::with_capacity(set.len()),
            used: vec![false; set.len()],
            phase: Phase::Fresh,
        }
    }
}

impl<'a, T: Clone> Walk for PermutationCombinations<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Exhausted => return false,
            Phase::Fresh => {
                self.phase = Phase::Running;
                self.cursors.push(0);
                return true;
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
                    self.cursors.push(0);
                    return true;
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
