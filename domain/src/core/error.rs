//! Domain error types

use thiserror::Error;

/// Message shown to the user whenever the input is rejected.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

/// Errors raised while turning user text into a query.
///
/// Everything past parsing is total, so this is the only error the
/// evaluation engine can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
}

impl InputError {
    /// The fixed, user-facing message for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::NotAnInteger(_) => INVALID_NUMBER_MESSAGE,
        }
    }

    /// The raw text that was rejected
    pub fn input(&self) -> &str {
        match self {
            InputError::NotAnInteger(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_integer_display() {
        let error = InputError::NotAnInteger("abc".to_string());
        assert_eq!(error.to_string(), "not an integer: \"abc\"");
    }

    #[test]
    fn test_user_message_is_fixed() {
        let a = InputError::NotAnInteger("abc".to_string());
        let b = InputError::NotAnInteger("1.5".to_string());
        assert_eq!(a.user_message(), INVALID_NUMBER_MESSAGE);
        assert_eq!(a.user_message(), b.user_message());
        assert_eq!(b.input(), "1.5");
    }
}
