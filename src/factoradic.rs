//! Conversion between integers and the factorial number system.
//!
//! A factoradic numeral is a digit sequence, least-significant first, where the digit at position
//! `i` lies in `0..=i` and carries a place value of `i!`. Position 0 therefore always holds 0.

use crate::factorial::{Factorial, Lookup, Overflow, MAX_FACTORIAL};

/// Digits of `n` in the factorial number system, least-significant first.
///
/// The result always has a leading 0 and is one digit longer than the largest `d` with
/// `d! <= n`. Exact over the entire `u128` range.
pub fn factoradic(n: u128) -> Vec<usize> {
    let lookup = Lookup::default();
    let mut radix = 0;
    while radix < MAX_FACTORIAL && lookup.get(radix + 1) <= n {
        radix += 1;
    }

    let mut digits = vec![0; radix as usize + 1];
    let mut residual = n;
    for position in (1..=radix).rev() {
        let place = lookup.get(position);
        digits[position as usize] = (residual / place) as usize;
        residual %= place;
    }
    debug_assert_eq!(0, residual);
    digits
}

/// The integer represented by factoradic `digits` (least-significant first).
pub fn from_factoradic(digits: &[usize]) -> u128 {
    try_from_factoradic(digits).unwrap_or_else(|err| panic!("{err}"))
}

pub fn try_from_factoradic(digits: &[usize]) -> Result<u128, Overflow> {
    let lookup = Lookup::default();
    let overflow = || Overflow::of(format!("factoradic {digits:?}"));
    let mut value = 0u128;
    for (position, &digit) in digits.iter().enumerate() {
        debug_assert!(digit <= position, "digit {digit} at position {position} is out of range");
        if digit == 0 {
            continue;
        }
        let place = lookup.try_get(position as u64).map_err(|_| overflow())?;
        value = place
            .checked_mul(digit as u128)
            .and_then(|term| value.checked_add(term))
            .ok_or_else(overflow)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::factorial;

    #[test]
    fn small_values() {
        assert_eq!(vec![0], factoradic(0));
        assert_eq!(vec![0, 1], factoradic(1));
        assert_eq!(vec![0, 0, 1], factoradic(2));
        assert_eq!(vec![0, 1, 1], factoradic(3));
        assert_eq!(vec![0, 0, 2, 0, 4], factoradic(100));
        assert_eq!(vec![0, 1, 2, 2, 0, 5, 1], factoradic(1337));
        assert_eq!(vec![0, 1, 0, 0, 0, 3, 5, 1], factoradic(9001));
    }

    #[test]
    fn large_value_is_exact() {
        assert_eq!(
            vec![
                0, 0, 0, 2, 0, 2, 6, 1, 6, 1, 8, 3, 5, 11, 0, 15, 11, 12, 18, 0, 10, 2, 21, 12, 4,
                21, 9
            ],
            factoradic(3_958_174_309_503_149_571_029_856_012)
        );
    }

    #[test]
    fn digits_are_bounded_by_position() {
        for n in [0, 7, 719, 720, 5_039, 5_040, u64::MAX as u128, u128::MAX] {
            let digits = factoradic(n);
            assert_eq!(0, digits[0]);
            for (position, &digit) in digits.iter().enumerate() {
                assert!(digit <= position, "n: {n}, digits: {digits:?}");
            }
            if n > 0 {
                assert_ne!(0, *digits.last().unwrap(), "n: {n}, digits: {digits:?}");
            }
        }
    }

    #[test]
    fn inverse() {
        for n in (0..10_000).chain([u64::MAX as u128, u128::MAX]) {
            assert_eq!(n, from_factoradic(&factoradic(n)));
        }
    }

    #[test]
    fn factorials_have_a_single_leading_one() {
        assert_eq!(vec![0, 0, 0, 0, 0, 1], factoradic(120));
        assert_eq!(120, from_factoradic(&[0, 0, 0, 0, 0, 1]));
    }

    #[test]
    fn inverse_overflow() {
        let mut digits = vec![0; MAX_FACTORIAL as usize + 1];
        digits[MAX_FACTORIAL as usize] = 2;
        assert!(try_from_factoradic(&digits).is_err());
        digits[MAX_FACTORIAL as usize] = 1;
        assert_eq!(Ok(factorial(MAX_FACTORIAL)), try_from_factoradic(&digits));
    }
}
