//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod evaluation;
mod output;
mod repl;

pub use evaluation::FileEvaluationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::{DEFAULT_PROMPT, FileReplConfig};

use mathbook_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Report tunables
    pub evaluation: FileEvaluationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Numeric ranges in `[evaluation]`
    /// 2. A blank `repl.prompt`
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Range validation
        issues.extend(self.evaluation.to_params().1);

        // 2. Blank prompt
        if self.repl.prompt.trim().is_empty() {
            issues.push(ConfigIssue {
                code: ConfigIssueCode::EmptyValue {
                    field: "repl.prompt".to_string(),
                },
                message: format!(
                    "repl.prompt is empty, falling back to '{}'",
                    DEFAULT_PROMPT
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathbook_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[evaluation]
multiples_count = 10
factorial_cutoff = 12

[output]
format = "plain"
color = false

[repl]
prompt = "numbers"
show_banner = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.evaluation.multiples_count, 10);
        assert_eq!(config.evaluation.factorial_cutoff, 12);
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert!(!config.output.color);
        assert_eq!(config.repl.prompt, "numbers");
        assert!(!config.repl.show_banner);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[evaluation]
factorial_cutoff = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.evaluation.factorial_cutoff, 10);
        // Defaults should apply
        assert_eq!(config.evaluation.multiples_count, 5);
        assert_eq!(config.output.format, OutputFormat::Full);
        assert!(config.output.color);
        assert!(config.repl.show_banner);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.evaluation, FileEvaluationConfig::default());
        assert_eq!(config.repl.prompt, DEFAULT_PROMPT);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[evaluation]
multiples_count = 500
factorial_cutoff = 25

[repl]
prompt = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyValue { field } if field == "repl.prompt"
        )));
    }
}
