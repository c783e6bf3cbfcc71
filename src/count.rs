//! Counting the results of each enumeration without enumerating them.
//!
//! All counts are exact `u128` values. Permutation and combination counts are accumulated
//! multiplicatively rather than as a ratio of factorials, so they remain exact for arguments
//! well past the factorial limit of 34. Where an argument pair makes the count impossible
//! (e.g., `r > n` without replacement), the count is zero.

use crate::factorial::Overflow;

/// Whether a selection may repeat elements and whether the order of the selected elements matters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Choices {
    pub replace: bool,
    pub ordered: bool,
}

/// The number of ordered selections of `r` items from a set of `n` without replacement:
/// `n! / (n - r)!`.
pub fn permutation_count(n: u64, r: u64) -> u128 {
    try_permutation_count(n, r).unwrap_or_else(|err| panic!("{err}"))
}

pub fn try_permutation_count(n: u64, r: u64) -> Result<u128, Overflow> {
    if r > n {
        return Ok(0);
    }
    (0..r).try_fold(1u128, |product, i| {
        product
            .checked_mul((n - i) as u128)
            .ok_or_else(|| Overflow::of(format!("P({n}, {r})")))
    })
}

/// Binomial coefficient: the number of combinations obtained when sampling `r` items from a
/// set of `n` without replacement.
pub fn combination_count(n: u64, r: u64) -> u128 {
    try_combination_count(n, r).unwrap_or_else(|err| panic!("{err}"))
}

pub fn try_combination_count(n: u64, r: u64) -> Result<u128, Overflow> {
    if r > n {
        return Ok(0);
    }
    let r_min = r.min(n - r);
    let mut coefficient = 1u128;
    for i in 1..=r_min as u128 {
        // each intermediate quotient is itself a binomial coefficient, so the division is exact
        coefficient = coefficient
            .checked_mul((n - r_min) as u128 + i)
            .ok_or_else(|| Overflow::of(format!("C({n}, {r})")))?
            / i;
    }
    Ok(coefficient)
}

/// The number of ways to choose `k` items from a set of `n`, dispatched on whether items may be
/// replaced and whether their order matters.
///
/// | replace | ordered | count |
/// |---|---|---|
/// | yes | yes | `n^k` |
/// | yes | no | `C(n + k - 1, k)` |
/// | no | yes | `P(n, k)` |
/// | no | no | `C(n, k)` |
pub fn choices(n: u64, k: u64, choices: Choices) -> u128 {
    try_choices(n, k, choices).unwrap_or_else(|err| panic!("{err}"))
}

pub fn try_choices(n: u64, k: u64, choices: Choices) -> Result<u128, Overflow> {
    match (choices.replace, choices.ordered) {
        (true, true) => power(n, k),
        (true, false) => {
            if k == 0 {
                Ok(1)
            } else {
                let n_plus = n
                    .checked_add(k - 1)
                    .ok_or_else(|| Overflow::of(format!("C({n} + {k} - 1, {k})")))?;
                try_combination_count(n_plus, k)
            }
        }
        (false, true) => try_permutation_count(n, k),
        (false, false) => try_combination_count(n, k),
    }
}

fn power(n: u64, k: u64) -> Result<u128, Overflow> {
    match n {
        0 => Ok(if k == 0 { 1 } else { 0 }),
        1 => Ok(1),
        _ => u32::try_from(k)
            .ok()
            .and_then(|k| (n as u128).checked_pow(k))
            .ok_or_else(|| Overflow::of(format!("{n}^{k}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::factorial;

    const SEQUENCE: Choices = Choices {
        replace: true,
        ordered: true,
    };
    const MULTISET: Choices = Choices {
        replace: true,
        ordered: false,
    };
    const ARRANGEMENT: Choices = Choices {
        replace: false,
        ordered: true,
    };

    #[test]
    fn test_permutation_count() {
        assert_eq!(720, permutation_count(10, 3));
        assert_eq!(10, permutation_count(10, 1));
        assert_eq!(1, permutation_count(10, 0));
        assert_eq!(3_628_800, permutation_count(10, 10));
        assert_eq!(1, permutation_count(0, 0));
        assert_eq!(0, permutation_count(3, 4));
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(120, combination_count(10, 3));
        assert_eq!(10, combination_count(10, 1));
        assert_eq!(1, combination_count(10, 0));
        assert_eq!(1, combination_count(10, 10));
        assert_eq!(10, combination_count(5, 3));
        assert_eq!(1, combination_count(0, 0));
        assert_eq!(0, combination_count(3, 4));
    }

    #[test]
    fn counts_agree_with_factorial_ratios() {
        for n in 0..=20 {
            for r in 0..=n {
                let expected_p = factorial(n) / factorial(n - r);
                assert_eq!(expected_p, permutation_count(n, r), "P({n}, {r})");
                assert_eq!(expected_p / factorial(r), combination_count(n, r), "C({n}, {r})");
            }
        }
    }

    #[test]
    fn counts_beyond_factorial_limit() {
        assert_eq!(9_900, permutation_count(100, 2));
        assert_eq!(4_950, combination_count(100, 2));
        assert_eq!(100_891_344_545_564_193_334_812_497_256, combination_count(100, 50));
    }

    #[test]
    fn count_overflow() {
        assert_eq!(Err(Overflow::of("P(100, 50)")), try_permutation_count(100, 50));
        assert_eq!(Err(Overflow::of("2^128")), try_choices(2, 128, SEQUENCE));
    }

    #[test]
    fn test_choices() {
        assert_eq!(1000, choices(10, 3, SEQUENCE));
        assert_eq!(220, choices(10, 3, MULTISET));
        assert_eq!(720, choices(10, 3, ARRANGEMENT));
        assert_eq!(120, choices(10, 3, Choices::default()));
    }

    #[test]
    fn choices_dispatch_to_counters() {
        for n in 0..8 {
            for k in 0..6 {
                assert_eq!((n as u128).pow(k as u32), choices(n, k, SEQUENCE));
                if n + k > 0 {
                    assert_eq!(combination_count(n + k - 1, k), choices(n, k, MULTISET));
                }
                assert_eq!(permutation_count(n, k), choices(n, k, ARRANGEMENT));
                assert_eq!(combination_count(n, k), choices(n, k, Choices::default()));
            }
        }
    }

    #[test]
    fn choices_with_replacement_from_nothing() {
        assert_eq!(1, choices(0, 0, MULTISET));
        assert_eq!(0, choices(0, 2, MULTISET));
        assert_eq!(1, choices(0, 0, SEQUENCE));
        assert_eq!(0, choices(0, 2, SEQUENCE));
    }
}
