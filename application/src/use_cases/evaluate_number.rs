//! Evaluate Number use case.
//!
//! Parses raw user text, computes every predicate for the number and builds
//! the ordered report. This is the single entry point the presentation layer
//! calls; no numeric logic lives outside the domain crate.

use crate::config::EvaluationParams;
use mathbook_domain::{InputError, NumberProfile, QueryInput, Report, ReportBuilder};
use serde::Serialize;
use tracing::debug;

/// Result of a successful evaluation: the report plus the data behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    #[serde(flatten)]
    pub report: Report,
    pub profile: NumberProfile,
}

/// Use case for evaluating one number.
///
/// Holds no mutable state, so evaluating the same text twice always gives
/// the same result.
#[derive(Debug, Clone, Default)]
pub struct EvaluateNumberUseCase {
    params: EvaluationParams,
}

impl EvaluateNumberUseCase {
    pub fn new(params: EvaluationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EvaluationParams {
        &self.params
    }

    /// Parse `raw_text` and return the ordered statements for it.
    ///
    /// ```
    /// use mathbook_application::EvaluateNumberUseCase;
    ///
    /// let use_case = EvaluateNumberUseCase::default();
    /// let report = use_case.execute("12").unwrap();
    /// assert_eq!(report.statements[0], "12 is even.");
    /// assert!(use_case.execute("abc").is_err());
    /// ```
    pub fn execute(&self, raw_text: &str) -> Result<Report, InputError> {
        self.evaluate(raw_text).map(|evaluation| evaluation.report)
    }

    /// Parse `raw_text` and return both the report and the profile it was
    /// built from.
    pub fn evaluate(&self, raw_text: &str) -> Result<Evaluation, InputError> {
        let query = QueryInput::parse(raw_text).inspect_err(|_| {
            debug!("Rejected input {:?}", raw_text);
        })?;

        let profile = NumberProfile::compute(query.value(), &self.params.limits());
        let report = ReportBuilder::build(&profile);

        debug!(
            "Evaluated {}: {} properties, {} statements",
            query,
            profile.properties.len(),
            report.len()
        );

        Ok(Evaluation { report, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathbook_domain::FACTORIAL_TOO_LARGE;

    fn use_case() -> EvaluateNumberUseCase {
        EvaluateNumberUseCase::default()
    }

    fn position(report: &Report, statement: &str) -> usize {
        match report.position(statement) {
            Some(index) => index,
            None => panic!("missing statement {statement:?} in {:#?}", report.statements),
        }
    }

    #[test]
    fn test_twelve_in_order() {
        let report = use_case().execute("12").unwrap();
        let expected = [
            "12 is even.",
            "The first 5 multiples of 12 are [12, 24, 36, 48, 60]",
            "Divisors: [1, 2, 3, 4, 6, 12]",
            "The square root of 12 is 3.464",
            "12 is composite",
            "12 is abundant",
            FACTORIAL_TOO_LARGE,
        ];
        let positions: Vec<usize> = expected.iter().map(|s| position(&report, s)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(report.statements.last().map(String::as_str), Some(FACTORIAL_TOO_LARGE));
    }

    #[test]
    fn test_twenty_eight_is_perfect_not_abundant() {
        let report = use_case().execute("28").unwrap();
        assert!(report.contains("28 is perfect"));
        assert!(!report.contains("28 is abundant"));
        assert!(!report.contains("28 is deficient"));
    }

    #[test]
    fn test_zero() {
        let report = use_case().execute("0").unwrap();
        assert!(report.contains("0 is a multiple of every number."));
        assert!(report.contains("Every non-zero number is considered a divisor of 0"));
        assert!(!report.contains("0 is prime"));
        assert!(!report.contains("0 is composite"));
    }

    #[test]
    fn test_negative_seven() {
        let report = use_case().execute("-7").unwrap();
        assert_eq!(report.statements[0], "-7 is odd.");
        assert!(report.contains(
            "-7 is negative and does not have properties like prime, composite, or multiples"
        ));
        assert!(!report.iter().any(|s| s.contains("multiples of")));
        assert!(!report.iter().any(|s| s.starts_with("Divisors")));
    }

    #[test]
    fn test_every_i64_gets_a_report() {
        let report = use_case().execute("9223372036854775807").unwrap();
        assert!(report.contains("9223372036854775807 is composite"));

        let report = use_case().execute("9223372036854775783").unwrap();
        assert!(report.contains("9223372036854775783 is prime"));

        let report = use_case().execute("-9223372036854775808").unwrap();
        assert_eq!(report.statements[0], "-9223372036854775808 is even.");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            use_case().execute("abc"),
            Err(InputError::NotAnInteger("abc".to_string()))
        );
        assert!(use_case().execute("12.5").is_err());
        assert!(use_case().execute("").is_err());
    }

    #[test]
    fn test_idempotent() {
        let use_case = use_case();
        for raw in ["12", "0", "-7", "153", "abc"] {
            assert_eq!(use_case.execute(raw), use_case.execute(raw));
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(use_case().execute("  12\n"), use_case().execute("12"));
    }

    #[test]
    fn test_params_change_report() {
        let params = EvaluationParams::default()
            .with_multiples_count(3)
            .with_factorial_cutoff(12);
        let report = EvaluateNumberUseCase::new(params).execute("12").unwrap();
        assert!(report.contains("The first 3 multiples of 12 are [12, 24, 36]"));
        assert!(report.contains("The factorial of 12 is 479001600"));
    }

    #[test]
    fn test_evaluation_json_shape() {
        let evaluation = use_case().evaluate("6").unwrap();
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["number"], 6);
        assert_eq!(json["statements"][0], "6 is even.");
        assert_eq!(json["profile"]["abundance"], "perfect");
    }
}
