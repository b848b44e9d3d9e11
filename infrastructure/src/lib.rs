//! Infrastructure layer for mathbook
//!
//! This crate contains adapters for the outside world: configuration file
//! discovery, parsing and validation.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, DEFAULT_PROMPT, FileConfig, FileEvaluationConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
