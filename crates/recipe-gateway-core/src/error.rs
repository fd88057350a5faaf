use std::fmt;

use serde_json::Value;

/// Errors raised when an upstream payload does not have the shape a decoder
/// expects.
///
/// Decoders never fail on a well-formed but incomplete object; these variants
/// only cover structural mismatches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Object decode was handed something other than a JSON object.
    NotAnObject { actual: &'static str },
    /// Tuple decode was handed something other than a JSON array.
    NotAnArray { actual: &'static str },
    /// A positional tuple had fewer elements than the contract requires.
    TupleTooShort { expected: usize, actual: usize },
    /// A tuple element was an array or object and cannot be read as a scalar.
    UnsupportedElement { index: usize, actual: &'static str },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { actual } => {
                write!(f, "expected a JSON object, got {actual}")
            }
            Self::NotAnArray { actual } => {
                write!(f, "expected a JSON array, got {actual}")
            }
            Self::TupleTooShort { expected, actual } => {
                write!(
                    f,
                    "positional tuple has {actual} elements, expected at least {expected}"
                )
            }
            Self::UnsupportedElement { index, actual } => {
                write!(
                    f,
                    "tuple element {index} is {actual}, expected a string, number, boolean or null"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Human-readable name of a JSON value's type, used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
