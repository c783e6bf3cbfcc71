//! Factorials over `u128`, and the overflow error shared by all exact counters.

use thiserror::Error;

/// Largest `n` for which `n!` fits in a `u128`.
pub const MAX_FACTORIAL: u64 = 34;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{operation} overflows u128")]
pub struct Overflow {
    pub operation: String,
}
impl Overflow {
    pub(crate) fn of(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

pub trait Factorial {
    fn try_get(&self, n: u64) -> Result<u128, Overflow>;

    #[inline]
    fn get(&self, n: u64) -> u128 {
        self.try_get(n).unwrap_or_else(|err| panic!("{err}"))
    }
}

/// Computes each factorial on demand by accumulation.
#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn try_get(&self, n: u64) -> Result<u128, Overflow> {
        if n > MAX_FACTORIAL {
            return Err(Overflow::of(format!("{n}!")));
        }
        let mut product = 1u128;
        for i in 2..=n {
            product *= i as u128;
        }
        Ok(product)
    }
}

const MAX_ENTRIES: usize = MAX_FACTORIAL as usize + 1;

/// Precomputed table of every factorial that fits in a `u128`.
pub struct Lookup {
    entries: [u128; MAX_ENTRIES],
}
impl Factorial for Lookup {
    #[inline]
    fn try_get(&self, n: u64) -> Result<u128, Overflow> {
        usize::try_from(n)
            .ok()
            .and_then(|n| self.entries.get(n))
            .copied()
            .ok_or_else(|| Overflow::of(format!("{n}!")))
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = [1u128; MAX_ENTRIES];
        for i in 2..MAX_ENTRIES {
            entries[i] = i as u128 * entries[i - 1];
        }
        Self { entries }
    }
}

/// `n!`, panicking if the result does not fit in a `u128` (`n > 34`).
pub fn factorial(n: u64) -> u128 {
    Calculator.get(n)
}

pub fn try_factorial(n: u64) -> Result<u128, Overflow> {
    Calculator.try_get(n)
}
