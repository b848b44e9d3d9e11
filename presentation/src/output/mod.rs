//! Rendering of reports, definitions and errors

pub mod console;
pub mod formatter;
