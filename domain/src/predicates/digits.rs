//! Predicates over the decimal representation of a number

/// `true` when the decimal text of `n` reads the same reversed
///
/// The minus sign is part of the text, so negative numbers are never
/// palindromes.
pub fn is_palindrome(n: i64) -> bool {
    let text = n.to_string();
    text.bytes().eq(text.bytes().rev())
}

/// `true` when `n` equals the sum of its digits each raised to the digit count
///
/// Negative numbers are never Armstrong numbers.
///
/// ```
/// use mathbook_domain::predicates::is_armstrong;
///
/// assert!(is_armstrong(153));
/// assert!(is_armstrong(9474));
/// assert!(!is_armstrong(-153));
/// ```
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let text = n.to_string();
    let power = text.len() as u32;

    // 19 digits of 9^19 still fit comfortably in a u128
    let total: u128 = text
        .bytes()
        .map(|b| u128::from(b - b'0').pow(power))
        .sum();
    total == n as u128
}

/// `true` when the decimal text of `n²` ends with the decimal text of `n`
pub fn is_automorphic(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let m = n as u128;
    (m * m).to_string().ends_with(&n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindrome() {
        for n in [0, 7, 11, 121, 1221, 12321] {
            assert!(is_palindrome(n), "{n} should be a palindrome");
        }
        for n in [10, 12, 123, 1231] {
            assert!(!is_palindrome(n), "{n} should not be a palindrome");
        }
    }

    #[test]
    fn test_palindrome_negative() {
        assert!(!is_palindrome(-121));
        assert!(!is_palindrome(-7));
        assert!(!is_palindrome(i64::MIN));
    }

    #[test]
    fn test_armstrong() {
        let armstrong: Vec<i64> = (0..10_000).filter(|&n| is_armstrong(n)).collect();
        assert_eq!(
            armstrong,
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407, 1634, 8208, 9474]
        );
    }

    #[test]
    fn test_armstrong_extremes() {
        assert!(!is_armstrong(i64::MAX));
        assert!(!is_armstrong(i64::MIN));
        assert!(is_armstrong(4_679_307_774));
    }

    #[test]
    fn test_automorphic() {
        for n in [0, 1, 5, 6, 25, 76, 376, 625, 9376] {
            assert!(is_automorphic(n), "{n} should be automorphic");
        }
        for n in [2, 7, 10, 24, 77] {
            assert!(!is_automorphic(n), "{n} should not be automorphic");
        }
        assert!(!is_automorphic(-25));
        assert!(!is_automorphic(i64::MAX));
    }
}
