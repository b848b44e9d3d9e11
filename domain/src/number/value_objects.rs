//! Value objects produced by the predicate library

use serde::{Deserialize, Serialize};

/// Whether a number is even or odd
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-way classification of a positive number against its proper-divisor sum
///
/// Exactly one variant applies to every positive integer. Zero and negative
/// numbers have no classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Abundance {
    /// Proper-divisor sum is less than the number
    Deficient,
    /// Proper-divisor sum equals the number
    Perfect,
    /// Proper-divisor sum exceeds the number
    Abundant,
}

impl Abundance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Abundance::Deficient => "deficient",
            Abundance::Perfect => "perfect",
            Abundance::Abundant => "abundant",
        }
    }
}

impl std::fmt::Display for Abundance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The first few multiples of a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "values")]
pub enum Multiples {
    /// Zero is a multiple of every number
    Every,
    /// `n * 1, n * 2, ..., n * count`
    List(Vec<i128>),
}

impl Multiples {
    /// The listed multiples, or an empty slice for [`Multiples::Every`]
    pub fn values(&self) -> &[i128] {
        match self {
            Multiples::Every => &[],
            Multiples::List(values) => values,
        }
    }
}

/// Result of the factorial lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Factorial {
    /// `n!` for `0 <= n <= cutoff`
    Value(u64),
    /// `n` is above the display cutoff
    TooLarge,
    /// `n` is negative
    Undefined,
}

impl Factorial {
    pub fn value(&self) -> Option<u64> {
        match self {
            Factorial::Value(v) => Some(*v),
            _ => None,
        }
    }
}
