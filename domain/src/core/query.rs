//! Query input value object

use super::error::InputError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One integer submitted for evaluation (Value Object)
///
/// Only constructed through parsing. The accepted grammar is an optional
/// leading `-` followed by one or more ASCII digits, after trimming
/// surrounding whitespace. Values outside the `i64` range are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryInput(i64);

impl QueryInput {
    /// Parse user text into a query
    ///
    /// # Examples
    ///
    /// ```
    /// use mathbook_domain::QueryInput;
    ///
    /// assert_eq!(QueryInput::parse("  -42 ").unwrap().value(), -42);
    /// assert!(QueryInput::parse("4.2").is_err());
    /// assert!(QueryInput::parse("+4").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let text = raw.trim();
        let digits = text.strip_prefix('-').unwrap_or(text);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotAnInteger(raw.to_string()));
        }

        text.parse::<i64>()
            .map(Self)
            .map_err(|_| InputError::NotAnInteger(raw.to_string()))
    }

    /// The integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for QueryInput {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for QueryInput {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for QueryInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
