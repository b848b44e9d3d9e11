//! Glossary of the terms used in reports
//!
//! A static, ordered catalogue. Lookups ignore case and surrounding
//! whitespace.

mod definitions;

use definitions::DEFINITIONS;
use serde::Serialize;

/// Text returned for terms that are not in the glossary
pub const DEFINITION_NOT_AVAILABLE: &str = "Definition not available.";

/// One glossary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub term: &'static str,
    pub text: &'static str,
}

/// All terms, in display order
pub fn terms() -> impl Iterator<Item = &'static str> {
    DEFINITIONS.iter().map(|d| d.term)
}

/// All entries, in display order
pub fn entries() -> &'static [Definition] {
    DEFINITIONS
}

/// Find an entry by term
pub fn find(term: &str) -> Option<&'static Definition> {
    let term = term.trim();
    DEFINITIONS.iter().find(|d| d.term.eq_ignore_ascii_case(term))
}

/// Definition text for `term`, or [`DEFINITION_NOT_AVAILABLE`]
///
/// ```
/// use mathbook_domain::glossary;
///
/// assert!(glossary::lookup("parity").starts_with("The fact of being even or odd"));
/// assert_eq!(glossary::lookup("Happy numbers"), glossary::DEFINITION_NOT_AVAILABLE);
/// ```
pub fn lookup(term: &str) -> &'static str {
    find(term).map_or(DEFINITION_NOT_AVAILABLE, |d| d.text)
}
