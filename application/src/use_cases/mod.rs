//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod evaluate_number;
pub mod lookup_definition;
