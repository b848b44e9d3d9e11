//! Primality

use super::factor::is_prime_u64;

/// `true` when `n` is prime
///
/// Exact for every `i64` (deterministic Miller-Rabin). Anything below 2,
/// including all negative numbers, is not prime.
///
/// ```
/// use mathbook_domain::predicates::is_prime;
///
/// assert!(is_prime(2));
/// assert!(!is_prime(9));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    n >= 2 && is_prime_u64(n as u64)
}

pub fn is_composite(n: i64) -> bool {
    n > 1 && !is_prime(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_below_two_is_never_prime() {
        for n in [-100, -7, -2, -1, 0, 1, i64::MIN] {
            assert!(!is_prime(n), "{n} should not be prime");
            assert!(!is_composite(n), "{n} should not be composite");
        }
    }

    #[test]
    fn test_composite() {
        assert!(is_composite(4));
        assert!(is_composite(9));
        assert!(is_composite(12));
        assert!(!is_composite(13));
        assert!(!is_composite(2));
    }

    #[test]
    fn test_squares_of_primes() {
        assert!(!is_prime(49));
        assert!(!is_prime(961));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
        assert!(is_prime(9_223_372_036_854_775_783));
        assert!(!is_prime(1_000_003 * 999_999_937));
    }
}
