//! Report building
//!
//! Turns the predicate results for one number into ordered statements.

pub mod builder;
pub mod entities;

pub use builder::{FACTORIAL_TOO_LARGE, ReportBuilder};
pub use entities::Report;
