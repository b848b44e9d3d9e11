//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use mathbook_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "full", "plain", or "json"
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Colour is only emitted for the decorated format
    pub fn use_color(&self) -> bool {
        self.color && self.format.is_decorated()
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Prompt label
    pub prompt: String,
    /// Print the welcome banner on start
    pub show_banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "mathbook".to_string(),
            show_banner: true,
        }
    }
}
