//! Report entity

use serde::{Deserialize, Serialize};

/// Ordered, human-readable statements about one number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub number: i64,
    pub statements: Vec<String>,
}

impl Report {
    pub fn new(number: i64) -> Self {
        Self {
            number,
            statements: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, statement: impl Into<String>) {
        self.statements.push(statement.into());
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.statements.iter()
    }

    /// `true` when some statement equals `statement` exactly
    pub fn contains(&self, statement: &str) -> bool {
        self.statements.iter().any(|s| s == statement)
    }

    /// Index of the first statement equal to `statement`
    pub fn position(&self, statement: &str) -> Option<usize> {
        self.statements.iter().position(|s| s == statement)
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.statements.join("\n"))
    }
}
