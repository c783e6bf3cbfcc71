//! Output disciplines for enumerated results.
//!
//! An [Output] is a minimalistic analogue of [Cow](std::borrow::Cow) over a result slice: in
//! [OutputMode::Shared] it borrows the enumerator's working buffer, which is overwritten on the
//! next pull; in [OutputMode::Cloned] it owns an independent copy.

use std::ops::Deref;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Every result is a view of the same working buffer. Valid only until the next pull.
    #[default]
    Shared,

    /// Every result is a freshly allocated copy.
    Cloned,
}
impl OutputMode {
    #[inline]
    pub fn emit<'a, T: Clone>(&self, buffer: &'a [T]) -> Output<'a, T> {
        match self {
            OutputMode::Shared => Output::Shared(buffer),
            OutputMode::Cloned => Output::Cloned(buffer.to_vec()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Output<'a, T> {
    Shared(&'a [T]),
    Cloned(Vec<T>),
}
impl<'a, T> Output<'a, T> {
    pub fn is_shared(&self) -> bool {
        matches!(self, Output::Shared(_))
    }

    pub fn into_owned(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Output::Shared(borrowed) => borrowed.to_vec(),
            Output::Cloned(owned) => owned,
        }
    }
}

impl<'a, T> Deref for Output<'a, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        match self {
            Output::Shared(borrowed) => borrowed,
            Output::Cloned(owned) => owned,
        }
    }
}

impl<'a, T: PartialEq> PartialEq<[T]> for Output<'a, T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}
