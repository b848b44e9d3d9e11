//! Output format value object

use serde::{Deserialize, Serialize};

/// How a report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured header and bulleted statements (default)
    #[default]
    Full,
    /// One statement per line, no decoration
    Plain,
    /// Statements and the full profile as JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Full => "full",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }

    /// `true` when the output is meant to be styled for a terminal
    pub fn is_decorated(&self) -> bool {
        matches!(self, OutputFormat::Full)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Valid: full, plain, json",
                s
            )),
        }
    }
}
