//! Reportable boolean properties
//!
//! [`Property::ALL`] fixes the order in which properties appear in a
//! report. Reports must be reproducible, so this order is part of the
//! public contract.

use crate::predicates;
use serde::{Deserialize, Serialize};

/// A boolean property that a report mentions when it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Prime,
    Composite,
    Perfect,
    Square,
    Cube,
    Fibonacci,
    Sublime,
    Triangular,
    Palindrome,
    Armstrong,
    PerfectSquare,
    Abundant,
    Automorphic,
    Deficient,
}

impl Property {
    /// Every property, in report order
    pub const ALL: [Property; 14] = [
        Property::Prime,
        Property::Composite,
        Property::Perfect,
        Property::Square,
        Property::Cube,
        Property::Fibonacci,
        Property::Sublime,
        Property::Triangular,
        Property::Palindrome,
        Property::Armstrong,
        Property::PerfectSquare,
        Property::Abundant,
        Property::Automorphic,
        Property::Deficient,
    ];

    /// Evaluate this property for `n`
    pub fn holds(&self, n: i64) -> bool {
        match self {
            Property::Prime => predicates::is_prime(n),
            Property::Composite => predicates::is_composite(n),
            Property::Perfect => predicates::is_perfect(n),
            Property::Square | Property::PerfectSquare => predicates::is_square(n),
            Property::Cube => predicates::is_cube(n),
            Property::Fibonacci => predicates::is_fibonacci(n),
            Property::Sublime => predicates::is_sublime(n),
            Property::Triangular => predicates::is_triangular(n),
            Property::Palindrome => predicates::is_palindrome(n),
            Property::Armstrong => predicates::is_armstrong(n),
            Property::Abundant => predicates::is_abundant(n),
            Property::Automorphic => predicates::is_automorphic(n),
            Property::Deficient => predicates::is_deficient(n),
        }
    }

    /// Predicate phrase completing "`n` is ..."
    pub fn phrase(&self) -> &'static str {
        match self {
            Property::Prime => "prime",
            Property::Composite => "composite",
            Property::Perfect => "perfect",
            Property::Square => "a square number",
            Property::Cube => "a cube number",
            Property::Fibonacci => "a Fibonacci number",
            Property::Sublime => "sublime",
            Property::Triangular => "triangular",
            Property::Palindrome => "a palindrome",
            Property::Armstrong => "an Armstrong number",
            Property::PerfectSquare => "a perfect square",
            Property::Abundant => "abundant",
            Property::Automorphic => "automorphic",
            Property::Deficient => "deficient",
        }
    }

    /// Identifier used in configuration and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Prime => "prime",
            Property::Composite => "composite",
            Property::Perfect => "perfect",
            Property::Square => "square",
            Property::Cube => "cube",
            Property::Fibonacci => "fibonacci",
            Property::Sublime => "sublime",
            Property::Triangular => "triangular",
            Property::Palindrome => "palindrome",
            Property::Armstrong => "armstrong",
            Property::PerfectSquare => "perfect_square",
            Property::Abundant => "abundant",
            Property::Automorphic => "automorphic",
            Property::Deficient => "deficient",
        }
    }

    /// Glossary entry explaining this property, if there is one
    pub fn glossary_term(&self) -> Option<&'static str> {
        match self {
            Property::Prime => Some("Prime numbers"),
            Property::Composite => Some("Composite"),
            Property::Perfect => Some("Perfect"),
            Property::Square | Property::PerfectSquare => Some("Perfect Square"),
            Property::Cube => None,
            Property::Fibonacci => Some("Fibonacci Series"),
            Property::Sublime => Some("Sublime numbers"),
            Property::Triangular => Some("Triangular Numbers"),
            Property::Palindrome => Some("Palindromic number"),
            Property::Armstrong => Some("Armstrong number"),
            Property::Abundant => Some("Abundant numbers"),
            Property::Automorphic => Some("Automorphic number"),
            Property::Deficient => Some("Deficient numbers"),
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Property::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| format!("Unknown property: {}", s))
    }
}
