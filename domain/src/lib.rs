//! Domain layer for mathbook
//!
//! This crate contains the property evaluation engine. It has no
//! dependencies on configuration files, logging or terminal concerns.
//!
//! # Core Concepts
//!
//! ## Predicate Library
//!
//! Independent, pure functions of one integer ([`predicates`]). Every one is
//! total over `i64`: edge cases become `false` or a sentinel, never a panic.
//!
//! ## Report Builder
//!
//! [`NumberProfile`] gathers every predicate result for one number and
//! [`ReportBuilder`] turns it into ordered, human-readable statements.
//!
//! ```
//! use mathbook_domain::{NumberProfile, ProfileLimits, QueryInput, ReportBuilder};
//!
//! let query = QueryInput::parse("28").unwrap();
//! let profile = NumberProfile::compute(query.value(), &ProfileLimits::default());
//! let report = ReportBuilder::build(&profile);
//!
//! assert_eq!(report.statements[0], "28 is even.");
//! assert!(report.contains("28 is perfect"));
//! ```

pub mod config;
pub mod core;
pub mod glossary;
pub mod number;
pub mod predicates;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use crate::core::{
    error::{INVALID_NUMBER_MESSAGE, InputError},
    query::QueryInput,
};
pub use glossary::{DEFINITION_NOT_AVAILABLE, Definition};
pub use number::{
    profile::{NumberProfile, ProfileLimits},
    property::Property,
    value_objects::{Abundance, Factorial, Multiples, Parity},
};
pub use report::{FACTORIAL_TOO_LARGE, Report, ReportBuilder};
