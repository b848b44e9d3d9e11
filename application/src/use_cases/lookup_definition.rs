//! Lookup Definition use case.
//!
//! Resolves glossary terms for the "definitions" feature of the front ends.

use mathbook_domain::glossary;
use mathbook_domain::{DEFINITION_NOT_AVAILABLE, Definition, Property};
use tracing::debug;

/// Outcome of a glossary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(&'static Definition),
    NotFound,
}

impl LookupOutcome {
    /// Definition text, or the fixed "not available" message
    pub fn text(&self) -> &'static str {
        match self {
            LookupOutcome::Found(definition) => definition.text,
            LookupOutcome::NotFound => DEFINITION_NOT_AVAILABLE,
        }
    }
}

/// Use case for looking up glossary definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookupDefinitionUseCase;

impl LookupDefinitionUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Look up `term` by glossary name, or by property name such as
    /// `"armstrong"` or `"perfect-square"`.
    pub fn execute(&self, term: &str) -> LookupOutcome {
        let found = glossary::find(term).or_else(|| {
            term.parse::<Property>()
                .ok()
                .and_then(|p| p.glossary_term())
                .and_then(glossary::find)
        });

        match found {
            Some(definition) => LookupOutcome::Found(definition),
            None => {
                debug!("No glossary entry for {:?}", term);
                LookupOutcome::NotFound
            }
        }
    }

    /// Every glossary entry, in display order
    pub fn entries(&self) -> &'static [Definition] {
        glossary::entries()
    }
}
