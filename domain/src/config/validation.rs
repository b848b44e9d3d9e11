//! Structured configuration issues.
//!
//! Loading a config file never fails just because a value is odd. Every
//! problem has a fallback value, so issues are only ever warnings; values
//! that cannot be deserialized at all fail in the loader instead.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric value is outside its supported range and was clamped.
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
    /// A text value is empty where one is required.
    EmptyValue { field: String },
}

/// A detected issue in the configuration, already resolved by a fallback.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// The config key the issue is about
    pub fn field(&self) -> &str {
        match &self.code {
            ConfigIssueCode::OutOfRange { field, .. } | ConfigIssueCode::EmptyValue { field } => {
                field
            }
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
