//! Report assembly
//!
//! The builder only reads a [`NumberProfile`]; it never re-evaluates a
//! predicate. Statement order:
//!
//! 1. parity
//! 2. negative-number disclaimer (negative `n` only)
//! 3. zero statements, or multiples and divisors (positive `n` only)
//! 4. square root, exact or approximate but never both
//! 5. every property that holds, in [`Property::ALL`] order
//! 6. factorial

use super::entities::Report;
use crate::number::profile::NumberProfile;
use crate::number::property::Property;
use crate::number::value_objects::Factorial;

/// Message used when the factorial is above the display cutoff
pub const FACTORIAL_TOO_LARGE: &str = "Number too big to check for factorial!";

/// Turns a [`NumberProfile`] into a [`Report`]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(profile: &NumberProfile) -> Report {
        let n = profile.number;
        let mut report = Report::new(n);

        report.push(format!("{} is {}.", n, profile.parity));

        if n < 0 {
            report.push(format!(
                "{} is negative and does not have properties like prime, composite, or multiples",
                n
            ));
        } else if n == 0 {
            report.push(format!("{} is a multiple of every number.", n));
            report.push(format!(
                "Every non-zero number is considered a divisor of {}",
                n
            ));
        } else {
            let multiples = profile.multiples.values();
            report.push(format!(
                "The first {} multiples of {} are {}",
                multiples.len(),
                n,
                Self::list(multiples)
            ));
            report.push(format!("Divisors: {}", Self::list(&profile.divisors)));
        }

        report.push(match profile.perfect_square_root {
            Some(root) => format!("The square root of {} is {}", n, root),
            None => format!("The square root of {} is {}", n, profile.square_root),
        });

        for property in Property::ALL {
            if profile.has(property) {
                report.push(format!("{} is {}", n, property.phrase()));
            }
        }

        report.push(match profile.factorial {
            Factorial::Value(value) => format!("The factorial of {} is {}", n, value),
            Factorial::TooLarge => FACTORIAL_TOO_LARGE.to_string(),
            Factorial::Undefined => format!("The factorial of {} is undefined", n),
        });

        report
    }

    fn list<T: std::fmt::Display>(values: &[T]) -> String {
        let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        format!("[{}]", items.join(", "))
    }
}
