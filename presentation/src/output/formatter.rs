//! Output formatter trait

use mathbook_application::Evaluation;
use mathbook_domain::OutputFormat;

/// Trait for formatting evaluations
pub trait OutputFormatter {
    /// Format with a header and bulleted statements
    fn format(&self, evaluation: &Evaluation) -> String;

    /// Format as JSON
    fn format_json(&self, evaluation: &Evaluation) -> String;

    /// One statement per line, nothing else
    fn format_plain(&self, evaluation: &Evaluation) -> String;

    /// Dispatch on `format`
    fn render(&self, evaluation: &Evaluation, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(evaluation),
            OutputFormat::Plain => self.format_plain(evaluation),
            OutputFormat::Json => self.format_json(evaluation),
        }
    }
}
