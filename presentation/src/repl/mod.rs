//! Interactive prompt
//!
//! A reedline-based loop that evaluates each line as a number.

mod number_repl;

pub use number_repl::{NumberRepl, ReplAction};
