//! Evaluation parameters: what the engine computes for each query.
//!
//! [`EvaluationParams`] groups the tunables that change report contents
//! without changing predicate semantics. Values are clamped into their
//! supported ranges on the way in, so a use case never sees an unusable
//! setting.

use mathbook_domain::ProfileLimits;
use mathbook_domain::predicates::{
    DEFAULT_FACTORIAL_CUTOFF, DEFAULT_MULTIPLES_COUNT, MAX_FACTORIAL_CUTOFF,
};
use serde::{Deserialize, Serialize};

/// Smallest accepted number of listed multiples
pub const MIN_MULTIPLES_COUNT: usize = 1;

/// Largest accepted number of listed multiples
pub const MAX_MULTIPLES_COUNT: usize = 100;

/// Report tunables.
///
/// | Field | Default | Range |
/// |-------|---------|-------|
/// | `multiples_count` | 5 | 1..=100 |
/// | `factorial_cutoff` | 6 | 0..=20 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationParams {
    /// Number of multiples listed for positive numbers.
    pub multiples_count: usize,
    /// Largest number whose factorial is printed.
    pub factorial_cutoff: u64,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            multiples_count: DEFAULT_MULTIPLES_COUNT,
            factorial_cutoff: DEFAULT_FACTORIAL_CUTOFF,
        }
    }
}

impl EvaluationParams {
    // ==================== Builder Methods ====================

    pub fn with_multiples_count(mut self, count: usize) -> Self {
        self.multiples_count = count.clamp(MIN_MULTIPLES_COUNT, MAX_MULTIPLES_COUNT);
        self
    }

    pub fn with_factorial_cutoff(mut self, cutoff: u64) -> Self {
        self.factorial_cutoff = cutoff.min(MAX_FACTORIAL_CUTOFF);
        self
    }

    /// Limits handed to the domain when computing a profile
    pub fn limits(&self) -> ProfileLimits {
        ProfileLimits {
            multiples_count: self.multiples_count,
            factorial_cutoff: self.factorial_cutoff,
        }
    }
}
