//! Square and cube roots
//!
//! [`perfect_square_root`] is the only squareness test in the crate. Every
//! other square check goes through it.

/// Text used when a root has no real value
pub const UNDEFINED: &str = "undefined";

/// Exact integer square root, or `None` when `n` is not a perfect square
///
/// Negative numbers are never perfect squares.
///
/// ```
/// use mathbook_domain::predicates::perfect_square_root;
///
/// assert_eq!(perfect_square_root(0), Some(0));
/// assert_eq!(perfect_square_root(49), Some(7));
/// assert_eq!(perfect_square_root(12), None);
/// assert_eq!(perfect_square_root(-4), None);
/// ```
pub fn perfect_square_root(n: i64) -> Option<u64> {
    if n < 0 {
        return None;
    }
    exact_sqrt_u128(n as u128).map(|r| r as u64)
}

pub fn is_square(n: i64) -> bool {
    perfect_square_root(n).is_some()
}

/// `true` when `n` is the cube of an integer, negative cubes included
pub fn is_cube(n: i64) -> bool {
    let m = n.unsigned_abs();
    icbrt(m).checked_pow(3) == Some(m)
}

/// `√n` rounded to three decimal places, or `"undefined"` for negatives
pub fn square_root_display(n: i64) -> String {
    if n < 0 {
        return UNDEFINED.to_string();
    }
    format!("{:.3}", (n as f64).sqrt())
}

pub(crate) fn exact_sqrt_u128(m: u128) -> Option<u128> {
    let r = m.isqrt();
    (r * r == m).then_some(r)
}

fn icbrt(m: u64) -> u64 {
    // The float estimate can be off by one either way near 2^64
    let mut r = (m as f64).cbrt() as u64;
    while r > 0 && r.checked_pow(3).is_none_or(|c| c > m) {
        r -= 1;
    }
    while (r + 1).checked_pow(3).is_some_and(|c| c <= m) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_square_root() {
        assert_eq!(perfect_square_root(1), Some(1));
        assert_eq!(perfect_square_root(16), Some(4));
        assert_eq!(perfect_square_root(15), None);
        assert_eq!(perfect_square_root(17), None);
        assert_eq!(
            perfect_square_root(3_037_000_499 * 3_037_000_499),
            Some(3_037_000_499)
        );
        assert_eq!(perfect_square_root(i64::MAX), None);
        assert_eq!(perfect_square_root(i64::MIN), None);
    }

    #[test]
    fn test_is_square_matches_root() {
        for n in -50..500 {
            assert_eq!(is_square(n), perfect_square_root(n).is_some());
        }
    }

    #[test]
    fn test_is_cube() {
        for n in [0, 1, 8, 27, 64, 1000, -1, -8, -27, -1000] {
            assert!(is_cube(n), "{n} should be a cube");
        }
        for n in [2, 9, 26, 28, -2, -9, 100] {
            assert!(!is_cube(n), "{n} should not be a cube");
        }
    }

    #[test]
    fn test_is_cube_extremes() {
        assert!(is_cube(2_097_151 * 2_097_151 * 2_097_151));
        assert!(!is_cube(i64::MAX));
        assert!(!is_cube(i64::MIN + 1));
        // -2^63 is (-2^21)^3
        assert!(is_cube(i64::MIN));
    }

    #[test]
    fn test_square_root_display() {
        assert_eq!(square_root_display(12), "3.464");
        assert_eq!(square_root_display(2), "1.414");
        assert_eq!(square_root_display(16), "4.000");
        assert_eq!(square_root_display(0), "0.000");
        assert_eq!(square_root_display(-7), "undefined");
    }
}
