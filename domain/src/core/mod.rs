//! Core domain concepts shared across all subdomains.
//!
//! - [`query::QueryInput`]: a validated integer to evaluate
//! - [`error::InputError`]: the only error the engine can raise

pub mod error;
pub mod query;
