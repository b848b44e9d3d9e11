//! Configuration file loading for mathbook
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./mathbook.toml` or `./.mathbook.toml`
//! 3. Global: `<config_dir>/mathbook/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_PROMPT, FileConfig, FileEvaluationConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig,
};
pub use loader::ConfigLoader;
