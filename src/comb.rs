//! Combinations: the `size`-element subsets of a set, in increasing index order.

use tracing::trace;

use crate::enumerator::{Enumerator, Phase, Walk};

/// Lazily enumerates the `size`-combinations of `set`.
///
/// Results are produced in lexicographic order of element *positions* (not element values).
/// A `size` of 0 produces a single empty result; a `size` greater than `set.len()` produces none.
pub fn combinations<T: Clone>(set: &[T], size: usize) -> Enumerator<Combinations<T>> {
    trace!("combinations: set.len: {}, size: {size}", set.len());
    Enumerator::new(Combinations::new(set, size))
}

/// [combinations] of every element, i.e., a single result holding the whole set.
pub fn combinations_all<T: Clone>(set: &[T]) -> Enumerator<Combinations<T>> {
    combinations(set, set.len())
}

#[derive(Debug)]
pub struct Combinations<'a, T> {
    set: &'a [T],
    size: usize,
    buffer: Vec<T>,
    cursors: Vec<usize>,
    phase: Phase,
}
impl<'a, T> Combinations<'a, T> {
    pub fn new(set: &'a [T], size: usize) -> Self {
        Self {
            set,
            size,
            buffer: Vec::with_capacity(size.min(set.len())),
            cursors: Vec::with_capacity(size.min(set.len())),
            phase: Phase::Fresh,
        }
    }
}

impl<'a, T: Clone> Walk for Combinations<'a, T> {
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

        let (set, size) = (self.set, self.size);
        while let Some(&index) = self.cursors.last() {
            let depth = self.cursors.len() - 1;
            // the elements from `index` onwards must be able to fill the remaining slots
            if index < set.len() && set.len() - index >= size - depth {
                self.cursors[depth] = index + 1;
                self.buffer.truncate(depth);
                self.buffer.push(set[index].clone());
                if depth + 1 == size {
                    return true;
                }
                self.cursors.push(index + 1);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::combination_count;
    use crate::output::OutputMode;

    #[test]
    fn two_from_three() {
        let combs: Vec<_> = combinations(&[1, 2, 3], 2).into_iter().collect();
        assert_eq!(vec![vec![1, 2], vec![1, 3], vec![2, 3]], combs);
    }

    #[test]
    fn one_from_three() {
        let combs: Vec<_> = combinations(&[1, 2, 3], 1).into_iter().collect();
        assert_eq!(vec![vec![1], vec![2], vec![3]], combs);
    }

    #[test]
    fn size_zero_yields_one_empty() {
        let combs: Vec<_> = combinations(&[1, 2, 3], 0).into_iter().collect();
        assert_eq!(vec![Vec::<i32>::new()], combs);

        let combs: Vec<_> = combinations::<u8>(&[], 0).into_iter().collect();
        assert_eq!(vec![Vec::<u8>::new()], combs);
    }

    #[test]
    fn size_beyond_set_yields_nothing() {
        assert_eq!(0, combinations(&[1, 2, 3], 4).into_iter().count());
        assert_eq!(0, combinations::<u8>(&[], 1).into_iter().count());
    }

    #[test]
    fn defaults_to_whole_set() {
        let combs: Vec<_> = combinations_all(&[1, 2, 3]).into_iter().collect();
        assert_eq!(vec![vec![1, 2, 3]], combs);
    }

    #[test]
    fn strings() {
        let chars: Vec<_> = "abcd".chars().collect();
        let combs: Vec<String> = combinations(&chars, 2)
            .into_iter()
            .map(|comb| comb.into_iter().collect())
            .collect();
        assert_eq!(vec!["ab", "ac", "ad", "bc", "bd", "cd"], combs);
    }

    #[test]
    fn order_follows_positions_not_values() {
        let combs: Vec<_> = combinations(&[3, 1, 2], 2).into_iter().collect();
        assert_eq!(vec![vec![3, 1], vec![3, 2], vec![1, 2]], combs);
    }

    #[test]
    fn counts_match_binomial() {
        let set: Vec<_> = (0..8).collect();
        for size in 0..=10 {
            assert_eq!(
                combination_count(set.len() as u64, size as u64),
                combinations(&set, size).into_iter().count() as u128,
                "size: {size}"
            );
        }
    }

    #[test]
    fn shared_buffer_is_reused() {
        let mut enumerator = combinations(&[1, 2, 3, 4], 2);
        let mut address = None;
        let mut count = 0;
        while let Some(comb) = enumerator.pull() {
            assert!(comb.is_shared());
            assert_eq!(*address.get_or_insert(comb.as_ptr()), comb.as_ptr());
            count += 1;
        }
        assert_eq!(6, count);
    }

    #[test]
    fn cloned_matches_shared() {
        let mut shared = vec![];
        combinations(&[1, 2, 3, 4, 5], 3).for_each_shared(|comb| shared.push(comb.to_vec()));

        let mut enumerator = combinations(&[1, 2, 3, 4, 5], 3).with_mode(OutputMode::Cloned);
        let mut cloned = vec![];
        while let Some(comb) = enumerator.pull() {
            assert!(!comb.is_shared());
            cloned.push(comb.into_owned());
        }
        assert_eq!(shared, cloned);
    }
}
