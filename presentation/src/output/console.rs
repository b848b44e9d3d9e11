//! Console output formatter for number reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use mathbook_application::{Evaluation, LookupOutcome};
use mathbook_domain::{Definition, INVALID_NUMBER_MESSAGE, InputError, OutputFormat};

const WIDTH: usize = 50;

/// Formats evaluations for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(evaluation: &Evaluation) -> String {
        let report = &evaluation.report;
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Number {}", report.number)));
        output.push('\n');

        for statement in report {
            output.push_str(&format!("  {} {}\n", "*".cyan(), statement));
        }

        if !evaluation.profile.properties.is_empty() {
            let names = evaluation
                .profile
                .properties
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("\n{} {}\n", "Properties:".green().bold(), names));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(evaluation: &Evaluation) -> String {
        serde_json::to_string_pretty(evaluation).unwrap_or_else(|_| "{}".to_string())
    }

    /// One statement per line
    pub fn format_plain(evaluation: &Evaluation) -> String {
        evaluation.report.to_string()
    }

    /// Message shown for input that is not an integer
    pub fn format_error(error: &InputError, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::json!({
                "error": error.user_message(),
                "input": error.input(),
            })
            .to_string(),
            OutputFormat::Plain => INVALID_NUMBER_MESSAGE.to_string(),
            OutputFormat::Full => INVALID_NUMBER_MESSAGE.red().to_string(),
        }
    }

    /// Format a glossary lookup
    pub fn format_definition(term: &str, outcome: &LookupOutcome) -> String {
        match outcome {
            LookupOutcome::Found(definition) => {
                format!("{}\n  {}", definition.term.cyan().bold(), definition.text)
            }
            LookupOutcome::NotFound => {
                format!("{}\n  {}", term.trim().yellow().bold(), outcome.text())
            }
        }
    }

    /// Format the list of glossary terms
    pub fn format_terms(entries: &[Definition]) -> String {
        let mut output = format!("{}\n", "Glossary terms:".cyan().bold());
        for entry in entries {
            output.push_str(&format!("  * {}\n", entry.term));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn footer() -> String {
        "=".repeat(WIDTH).cyan().to_string()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, evaluation: &Evaluation) -> String {
        Self::format(evaluation)
    }

    fn format_json(&self, evaluation: &Evaluation) -> String {
        Self::format_json(evaluation)
    }

    fn format_plain(&self, evaluation: &Evaluation) -> String {
        Self::format_plain(evaluation)
    }
}
