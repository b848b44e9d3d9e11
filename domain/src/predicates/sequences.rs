//! Membership in the Fibonacci and triangular sequences

use super::roots::exact_sqrt_u128;

/// `true` when `n` is a Fibonacci number
///
/// Uses the identity that `n` is Fibonacci iff `5n² + 4` or `5n² - 4` is a
/// perfect square. `5n²` overflows `u128` only above every `i64` Fibonacci
/// number, so an overflow means "no".
///
/// ```
/// use mathbook_domain::predicates::is_fibonacci;
///
/// assert!(is_fibonacci(21));
/// assert!(!is_fibonacci(4));
/// ```
pub fn is_fibonacci(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let m = n as u128;
    let Some(five_m2) = m.checked_mul(m).and_then(|sq| sq.checked_mul(5)) else {
        return false;
    };

    five_m2
        .checked_add(4)
        .is_some_and(|x| exact_sqrt_u128(x).is_some())
        || (five_m2 >= 4 && exact_sqrt_u128(five_m2 - 4).is_some())
}

/// `true` when `n = k(k+1)/2` for some `k >= 0`
///
/// `k = (-1 + √(1 + 8n)) / 2` is an integer exactly when `1 + 8n` is a
/// perfect square, since that square is always odd.
pub fn is_triangular(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    exact_sqrt_u128(1 + 8 * n as u128).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_members() {
        for n in [0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144] {
            assert!(is_fibonacci(n), "{n} should be Fibonacci");
        }
    }

    #[test]
    fn test_fibonacci_non_members() {
        for n in [4, 6, 7, 9, 10, 12, 22, 100] {
            assert!(!is_fibonacci(n), "{n} should not be Fibonacci");
        }
    }

    #[test]
    fn test_fibonacci_negative() {
        assert!(!is_fibonacci(-1));
        assert!(!is_fibonacci(-8));
        assert!(!is_fibonacci(i64::MIN));
    }

    #[test]
    fn test_fibonacci_largest_i64_member() {
        // F(92)
        assert!(is_fibonacci(7_540_113_804_746_346_429));
        assert!(!is_fibonacci(7_540_113_804_746_346_430));
        assert!(!is_fibonacci(i64::MAX));
    }

    #[test]
    fn test_fibonacci_matches_sequence() {
        let mut expected = std::collections::BTreeSet::new();
        let (mut a, mut b) = (0i64, 1i64);
        while a <= 10_000 {
            expected.insert(a);
            (a, b) = (b, a + b);
        }
        for n in 0..=10_000 {
            assert_eq!(is_fibonacci(n), expected.contains(&n), "mismatch at {n}");
        }
    }

    #[test]
    fn test_triangular() {
        let triangular: Vec<i64> = (0..30).filter(|&n| is_triangular(n)).collect();
        assert_eq!(triangular, vec![0, 1, 3, 6, 10, 15, 21, 28]);
        assert!(!is_triangular(-1));
        assert!(!is_triangular(-3));
    }

    #[test]
    fn test_triangular_extremes() {
        assert!(!is_triangular(i64::MIN));
        assert!(!is_triangular(i64::MAX));
        // k = 4_294_967_295
        assert!(is_triangular(9_223_372_034_707_292_160));
    }
}
