//! Predicate library
//!
//! Independent, pure functions of one integer. Every function is total over
//! `i64`: edge cases resolve to `false` or to a sentinel value, never to a
//! panic.

pub mod arithmetic;
pub mod digits;
pub mod divisors;
mod factor;
pub mod primality;
pub mod roots;
pub mod sequences;

pub use arithmetic::{
    DEFAULT_FACTORIAL_CUTOFF, DEFAULT_MULTIPLES_COUNT, MAX_FACTORIAL_CUTOFF, factorial, multiples,
    parity,
};
pub use digits::{is_armstrong, is_automorphic, is_palindrome};
pub use divisors::{
    aliquot_sum, classify_abundance, divisors, is_abundant, is_deficient, is_perfect, is_sublime,
};
pub use primality::{is_composite, is_prime};
pub use roots::{is_cube, is_square, perfect_square_root, square_root_display};
pub use sequences::{is_fibonacci, is_triangular};
