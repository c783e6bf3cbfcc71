//! The pull surface shared by every enumerator.
//!
//! Each enumeration is a [Walk]: an explicit-stack, depth-first state machine that advances to
//! the next result on demand and leaves it in a working buffer. An [Enumerator] wraps a walk with
//! an [OutputMode], handing out either views of that buffer or independent copies.
//!
//! Enumerators are lazy and single-pass. A walk that has reported exhaustion stays exhausted; to
//! enumerate again, create a fresh one.

use std::iter::FusedIterator;

use crate::output::{Output, OutputMode};

pub trait Walk {
    type Item;

    /// Moves to the next result, returning `false` once (and every time after) the walk is
    /// exhausted.
    fn advance(&mut self) -> bool;

    /// The result produced by the last successful [advance](Walk::advance).
    fn current(&self) -> &[Self::Item];
}

/// Lifecycle of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Fresh,
    Running,
    Exhausted,
}

#[derive(Debug)]
pub struct Enumerator<W> {
    walk: W,
    mode: OutputMode,
}
impl<W: Walk> Enumerator<W> {
    pub fn new(walk: W) -> Self {
        Self {
            walk,
            mode: OutputMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Produces the next result, or `None` once the enumeration is exhausted.
    #[inline]
    pub fn pull(&mut self) -> Option<Output<W::Item>>
    where
        W::Item: Clone,
    {
        if self.walk.advance() {
            Some(self.mode.emit(self.walk.current()))
        } else {
            None
        }
    }

    /// Feeds every remaining result to `f` as a view of the working buffer, regardless of the
    /// configured mode.
    pub fn for_each_shared(mut self, mut f: impl FnMut(&[W::Item])) {
        while self.walk.advance() {
            f(self.walk.current());
        }
    }
}

/// Iterating by value always clones: a standard [Iterator] cannot lend out its own buffer.
impl<W: Walk> IntoIterator for Enumerator<W>
where
    W::Item: Clone,
{
    type Item = Vec<W::Item>;
    type IntoIter = Iter<W>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { walk: self.walk }
    }
}

#[derive(Debug)]
pub struct Iter<W> {
    walk: W,
}
impl<W: Walk> Iterator for Iter<W>
where
    W::Item: Clone,
{
    type Item = Vec<W::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.walk.advance() {
            Some(self.walk.current().to_vec())
        } else {
            None
        }
    }
}

impl<W: Walk> FusedIterator for Iter<W> where W::Item: Clone {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down to 1, one single-element result per step.
    struct Countdown {
        remaining: u32,
        buffer: [u32; 1],
    }
    impl Walk for Countdown {
        type Item = u32;

        fn advance(&mut self) -> bool {
            if self.remaining == 0 {
                return false;
            }
            self.buffer[0] = self.remaining;
            self.remaining -= 1;
            true
        }

        fn current(&self) -> &[u32] {
            &self.buffer
        }
    }

    fn countdown(from: u32) -> Enumerator<Countdown> {
        Enumerator::new(Countdown {
            remaining: from,
            buffer: [0],
        })
    }

    #[test]
    fn pull_shared() {
        let mut enumerator = countdown(3);
        assert_eq!(OutputMode::Shared, enumerator.mode());
        let mut addresses = vec![];
        let mut values = vec![];
        while let Some(output) = enumerator.pull() {
            assert!(output.is_shared());
            addresses.push(output.as_ptr());
            values.push(output[0]);
        }
        assert_eq!(vec![3, 2, 1], values);
        assert!(addresses.iter().all(|&address| address == addresses[0]));
    }

    #[test]
    fn pull_cloned() {
        let mut enumerator = countdown(2).with_mode(OutputMode::Cloned);
        let first = enumerator.pull().unwrap().into_owned();
        let second = enumerator.pull().unwrap().into_owned();
        assert_eq!((vec![2], vec![1]), (first, second));
        assert!(enumerator.pull().is_none());
    }

    #[test]
    fn stays_exhausted() {
        let mut enumerator = countdown(1);
        assert!(enumerator.pull().is_some());
        assert!(enumerator.pull().is_none());
        assert!(enumerator.pull().is_none());
    }

    #[test]
    fn into_iter_clones() {
        let results: Vec<_> = countdown(3).into_iter().collect();
        assert_eq!(vec![vec![3], vec![2], vec![1]], results);
    }

    #[test]
    fn for_each_shared() {
        let mut sum = 0;
        countdown(4)
            .with_mode(OutputMode::Cloned)
            .for_each_shared(|result| sum += result[0]);
        assert_eq!(10, sum);
    }
}
