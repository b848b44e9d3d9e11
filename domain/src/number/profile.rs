//! Full evaluation of one number

use super::property::Property;
use super::value_objects::{Abundance, Factorial, Multiples, Parity};
use crate::predicates::divisors::{classify_with_divisors, sublime_with_divisors};
use crate::predicates::{self, DEFAULT_FACTORIAL_CUTOFF, DEFAULT_MULTIPLES_COUNT};
use serde::{Deserialize, Serialize};

/// Knobs that change what gets computed for a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLimits {
    /// How many multiples to list
    pub multiples_count: usize,
    /// Largest `n` whose factorial is shown
    pub factorial_cutoff: u64,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            multiples_count: DEFAULT_MULTIPLES_COUNT,
            factorial_cutoff: DEFAULT_FACTORIAL_CUTOFF,
        }
    }
}

/// Every predicate and presentation value for one number (Entity)
///
/// Computed once per query and never cached. The report builder reads
/// from this instead of calling predicates itself, so a report and the
/// JSON view of the same query always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberProfile {
    pub number: i64,
    pub parity: Parity,
    pub multiples: Multiples,
    /// Divisors of a positive number; left empty for zero and negatives,
    /// which reports never list divisors for
    pub divisors: Vec<u64>,
    /// Exact root when `number` is a perfect square
    pub perfect_square_root: Option<u64>,
    /// `√number` to three decimals, `"undefined"` for negatives
    pub square_root: String,
    pub abundance: Option<Abundance>,
    /// Properties that hold, in report order
    pub properties: Vec<Property>,
    pub factorial: Factorial,
}

impl NumberProfile {
    /// Evaluate every predicate for `n`
    ///
    /// The divisor list is enumerated once. Primality, the aliquot
    /// classification and sublimity are all read from it.
    pub fn compute(n: i64, limits: &ProfileLimits) -> Self {
        let divisors = if n > 0 {
            predicates::divisors(n)
        } else {
            Vec::new()
        };
        let abundance = if n > 0 {
            classify_with_divisors(n as u64, &divisors)
        } else {
            None
        };
        let perfect_square_root = predicates::perfect_square_root(n);
        let prime = n > 1 && divisors.len() == 2;
        let sublime = n > 1 && sublime_with_divisors(&divisors);

        let properties = Property::ALL
            .into_iter()
            .filter(|&property| match property {
                Property::Prime => prime,
                Property::Composite => n > 1 && !prime,
                Property::Perfect => abundance == Some(Abundance::Perfect),
                Property::Abundant => abundance == Some(Abundance::Abundant),
                Property::Deficient => abundance == Some(Abundance::Deficient),
                Property::Sublime => sublime,
                Property::Square | Property::PerfectSquare => perfect_square_root.is_some(),
                other => other.holds(n),
            })
            .collect();

        Self {
            number: n,
            parity: predicates::parity(n),
            // Negative numbers have no listed multiples, same as divisors
            multiples: if n < 0 {
                Multiples::List(Vec::new())
            } else {
                predicates::multiples(n, limits.multiples_count)
            },
            divisors,
            perfect_square_root,
            square_root: predicates::square_root_display(n),
            abundance,
            properties,
            factorial: predicates::factorial(n, limits.factorial_cutoff),
        }
    }

    pub fn has(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }
}
