//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Prompt shown when the config does not set one
pub const DEFAULT_PROMPT: &str = "mathbook";

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt label
    pub prompt: String,
    /// Print the welcome banner on start
    pub show_banner: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
        }
    }
}

impl FileReplConfig {
    /// The configured prompt, falling back to the default when blank
    pub fn effective_prompt(&self) -> &str {
        let prompt = self.prompt.trim();
        if prompt.is_empty() { DEFAULT_PROMPT } else { prompt }
    }
}
