//! Evaluation configuration from TOML (`[evaluation]` section)

use mathbook_application::{EvaluationParams, MAX_MULTIPLES_COUNT, MIN_MULTIPLES_COUNT};
use mathbook_domain::predicates::{
    DEFAULT_FACTORIAL_CUTOFF, DEFAULT_MULTIPLES_COUNT, MAX_FACTORIAL_CUTOFF,
};
use mathbook_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw evaluation configuration from TOML
///
/// Stored as signed integers so that a negative value in the file is
/// reported as out of range instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluationConfig {
    /// Number of multiples listed for positive numbers
    pub multiples_count: i64,
    /// Largest number whose factorial is printed
    pub factorial_cutoff: i64,
}

impl Default for FileEvaluationConfig {
    fn default() -> Self {
        Self {
            multiples_count: DEFAULT_MULTIPLES_COUNT as i64,
            factorial_cutoff: DEFAULT_FACTORIAL_CUTOFF as i64,
        }
    }
}

impl FileEvaluationConfig {
    /// Convert to [`EvaluationParams`], clamping out-of-range values.
    ///
    /// Returns the params together with one warning per clamped field.
    pub fn to_params(&self) -> (EvaluationParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let multiples_count = clamp_field(
            "evaluation.multiples_count",
            self.multiples_count,
            MIN_MULTIPLES_COUNT as i64,
            MAX_MULTIPLES_COUNT as i64,
            &mut issues,
        );
        let factorial_cutoff = clamp_field(
            "evaluation.factorial_cutoff",
            self.factorial_cutoff,
            0,
            MAX_FACTORIAL_CUTOFF as i64,
            &mut issues,
        );

        let params = EvaluationParams::default()
            .with_multiples_count(multiples_count as usize)
            .with_factorial_cutoff(factorial_cutoff as u64);

        (params, issues)
    }
}

fn clamp_field(field: &str, value: i64, min: i64, max: i64, issues: &mut Vec<ConfigIssue>) -> i64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        issues.push(ConfigIssue {
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
                value,
                min,
                max,
            },
            message: format!(
                "{}: {} is outside {}..={}, using {}",
                field, value, min, max, clamped
            ),
        });
    }
    clamped
}
