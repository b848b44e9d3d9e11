//! Application layer for mathbook
//!
//! This crate contains use cases and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod use_cases;

// Re-export commonly used types
pub use config::{EvaluationParams, MAX_MULTIPLES_COUNT, MIN_MULTIPLES_COUNT};
pub use use_cases::evaluate_number::{EvaluateNumberUseCase, Evaluation};
pub use use_cases::lookup_definition::{LookupDefinitionUseCase, LookupOutcome};
