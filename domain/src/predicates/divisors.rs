//! Divisors and the aliquot classification
//!
//! Perfect, abundant and deficient are three views of a single comparison
//! between `n` and the sum of its proper divisors, so they are all derived
//! from [`classify_abundance`] and can never disagree.

use super::factor::{divisor_sum, factorize};
use crate::number::value_objects::Abundance;
use std::cmp::Ordering;

/// Positive divisors of `|n|`, ascending
///
/// Built from the prime factorization, so the cost does not grow with
/// `√|n|`. Zero has no finite divisor list and yields an empty vector.
///
/// ```
/// use mathbook_domain::predicates::divisors;
///
/// assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
/// assert_eq!(divisors(-9), vec![1, 3, 9]);
/// assert!(divisors(0).is_empty());
/// ```
pub fn divisors(n: i64) -> Vec<u64> {
    divisors_of(n.unsigned_abs())
}

pub(crate) fn divisors_of(m: u64) -> Vec<u64> {
    if m == 0 {
        return Vec::new();
    }

    let mut divisors = vec![1u64];
    for (p, k) in factorize(m) {
        let base_len = divisors.len();
        let mut power = 1u64;
        for _ in 0..k {
            // `power * p` divides `m`, so neither product can overflow
            power *= p;
            for i in 0..base_len {
                let d = divisors[i] * power;
                divisors.push(d);
            }
        }
    }
    divisors.sort_unstable();
    divisors
}

/// Sum of the divisors of `n` excluding `n` itself, for `n > 0`
pub fn aliquot_sum(n: i64) -> Option<u128> {
    if n <= 0 {
        return None;
    }
    Some(divisor_sum(n as u64) - n as u128)
}

/// Classify `n` as deficient, perfect or abundant
///
/// Returns `None` for `n <= 0`.
pub fn classify_abundance(n: i64) -> Option<Abundance> {
    if n <= 0 {
        return None;
    }
    Some(classify_by_sum(n as u64, divisor_sum(n as u64)))
}

/// Same as [`classify_abundance`], reusing an already computed divisor list of `m`
pub(crate) fn classify_with_divisors(m: u64, divisors: &[u64]) -> Option<Abundance> {
    if m == 0 {
        return None;
    }
    Some(classify_by_sum(m, sum(divisors)))
}

/// `sigma` is the sum of all divisors, `m` included
fn classify_by_sum(m: u64, sigma: u128) -> Abundance {
    match (sigma - u128::from(m)).cmp(&u128::from(m)) {
        Ordering::Less => Abundance::Deficient,
        Ordering::Equal => Abundance::Perfect,
        Ordering::Greater => Abundance::Abundant,
    }
}

fn sum(divisors: &[u64]) -> u128 {
    divisors.iter().map(|&d| u128::from(d)).sum()
}

pub fn is_perfect(n: i64) -> bool {
    classify_abundance(n) == Some(Abundance::Perfect)
}

pub fn is_abundant(n: i64) -> bool {
    classify_abundance(n) == Some(Abundance::Abundant)
}

pub fn is_deficient(n: i64) -> bool {
    classify_abundance(n) == Some(Abundance::Deficient)
}

/// `true` when both the number and the sum of the divisors of `n` are perfect
///
/// Only defined for `n > 1`. Divisor sums that do not fit in a `u64` are
/// treated as not perfect.
pub fn is_sublime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    sublime_with_divisors(&divisors_of(n as u64))
}

/// Same as [`is_sublime`], reusing the divisor list of a number above 1
pub(crate) fn sublime_with_divisors(divisors: &[u64]) -> bool {
    if divisors.len() < 2 {
        return false;
    }
    let count = divisors.len() as u64;
    is_perfect_u64(count) && u64::try_from(sum(divisors)).is_ok_and(is_perfect_u64)
}

fn is_perfect_u64(m: u64) -> bool {
    m > 0 && classify_by_sum(m, divisor_sum(m)) == Abundance::Perfect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(16), vec![1, 2, 4, 8, 16]);
        assert_eq!(divisors(13), vec![1, 13]);
        assert_eq!(divisors(28), vec![1, 2, 4, 7, 14, 28]);
    }

    #[test]
    fn test_divisors_of_negative_use_absolute_value() {
        assert_eq!(divisors(-12), divisors(12));
        assert_eq!(divisors(-(1 << 20)).last(), Some(&(1u64 << 20)));
        assert_eq!(divisors(-(1 << 20)).len(), 21);
    }

    #[test]
    fn test_divisors_of_zero() {
        assert!(divisors(0).is_empty());
    }

    #[test]
    fn test_aliquot_sum() {
        assert_eq!(aliquot_sum(1), Some(0));
        assert_eq!(aliquot_sum(12), Some(16));
        assert_eq!(aliquot_sum(28), Some(28));
        assert_eq!(aliquot_sum(0), None);
        assert_eq!(aliquot_sum(-6), None);
    }

    #[test]
    fn test_perfect_numbers() {
        let perfect: Vec<i64> = (1..10_000).filter(|&n| is_perfect(n)).collect();
        assert_eq!(perfect, vec![6, 28, 496, 8128]);
        assert!(!is_perfect(12));
        assert!(!is_perfect(0));
        assert!(!is_perfect(-6));
    }

    #[test]
    fn test_abundance_classification() {
        assert_eq!(classify_abundance(1), Some(Abundance::Deficient));
        assert_eq!(classify_abundance(8), Some(Abundance::Deficient));
        assert_eq!(classify_abundance(6), Some(Abundance::Perfect));
        assert_eq!(classify_abundance(12), Some(Abundance::Abundant));
        assert_eq!(classify_abundance(0), None);
        assert_eq!(classify_abundance(-12), None);
    }

    #[test]
    fn test_perfect_is_neither_abundant_nor_deficient() {
        for n in [6, 28, 496, 8128] {
            assert!(is_perfect(n));
            assert!(!is_abundant(n));
            assert!(!is_deficient(n));
        }
    }

    #[test]
    fn test_non_positive_has_no_classification() {
        for n in [0, -1, -12, i64::MIN] {
            assert!(!is_perfect(n));
            assert!(!is_abundant(n));
            assert!(!is_deficient(n));
        }
    }

    #[test]
    fn test_sublime() {
        // 12 has six divisors summing to 28
        assert!(is_sublime(12));
        assert!(!is_sublime(6));
        assert!(!is_sublime(28));
        assert!(!is_sublime(1));
        assert!(!is_sublime(0));
        assert!(!is_sublime(-12));
    }

    #[test]
    fn test_sublime_below_ten_thousand() {
        let sublime: Vec<i64> = (2..10_000).filter(|&n| is_sublime(n)).collect();
        assert_eq!(sublime, vec![12]);
    }

    #[test]
    fn test_divisors_of_large_values() {
        let max = divisors(i64::MAX);
        assert_eq!(max.len(), 96);
        assert_eq!(max.first(), Some(&1));
        assert_eq!(max.last(), Some(&(i64::MAX as u64)));
        assert!(max.windows(2).all(|w| w[0] < w[1]));
        assert!(max.iter().all(|&d| i64::MAX as u64 % d == 0));

        assert_eq!(divisors(9_223_372_036_854_775_783), vec![1, 9_223_372_036_854_775_783]);
        assert_eq!(divisors(i64::MIN).len(), 64);
    }

    #[test]
    fn test_helpers_agree_with_public_predicates() {
        for n in 1..2_000i64 {
            let list = divisors(n);
            assert_eq!(classify_with_divisors(n as u64, &list), classify_abundance(n));
            if n > 1 {
                assert_eq!(sublime_with_divisors(&list), is_sublime(n), "sublime {n}");
            }
        }
        assert_eq!(classify_with_divisors(0, &[]), None);
    }
}
