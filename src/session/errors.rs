//! Operand parsing errors
//!
//! The structures only ever see validated `i32`s. Turning the text typed at a
//! prompt into one happens here, at the session boundary.

use std::fmt;
use std::num::IntErrorKind;

/// Errors from parsing a typed operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was typed
    Empty,

    /// The text is not a base-10 integer
    NotAnInteger { input: String },

    /// The integer does not fit in 32 bits
    OutOfRange { input: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "no value entered"),
            InputError::NotAnInteger { input } => write!(f, "'{}' is not an integer", input),
            InputError::OutOfRange { input } => {
                write!(
                    f,
                    "{} is outside {}..={}",
                    input,
                    i32::MIN,
                    i32::MAX
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse an operand, ignoring surrounding whitespace
pub fn parse_value(input: &str) -> Result<i32, InputError> {
    let trimmed = input.trim();
    trimmed.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::Empty => InputError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange {
            input: trimmed.to_string(),
        },
        _ => InputError::NotAnInteger {
            input: trimmed.to_string(),
        },
    })
}
