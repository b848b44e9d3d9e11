//! Parity, multiples and factorials

use crate::number::value_objects::{Factorial, Multiples, Parity};

/// Default number of multiples listed in a report
pub const DEFAULT_MULTIPLES_COUNT: usize = 5;

/// Default display cutoff for factorials
pub const DEFAULT_FACTORIAL_CUTOFF: u64 = 6;

/// Largest `n` whose factorial fits in a `u64`
pub const MAX_FACTORIAL_CUTOFF: u64 = 20;

pub fn parity(n: i64) -> Parity {
    if n % 2 == 0 { Parity::Even } else { Parity::Odd }
}

/// The first `count` positive multiples of `n`
///
/// Computed in `i128` so that `i64::MAX * count` cannot overflow for any
/// realistic `count`.
pub fn multiples(n: i64, count: usize) -> Multiples {
    if n == 0 {
        return Multiples::Every;
    }
    let n = i128::from(n);
    Multiples::List((1..=count as i128).map(|k| n * k).collect())
}

/// `n!` for `0 <= n <= cutoff`
///
/// The cutoff is clamped to [`MAX_FACTORIAL_CUTOFF`].
pub fn factorial(n: i64, cutoff: u64) -> Factorial {
    if n < 0 {
        return Factorial::Undefined;
    }
    let n = n as u64;
    if n > cutoff.min(MAX_FACTORIAL_CUTOFF) {
        return Factorial::TooLarge;
    }
    Factorial::Value((1..=n).product())
}
