//! Application-level configuration.
//!
//! - [`EvaluationParams`]: report tunables (multiples listed, factorial cutoff)

pub mod evaluation_params;

pub use evaluation_params::{EvaluationParams, MAX_MULTIPLES_COUNT, MIN_MULTIPLES_COUNT};
