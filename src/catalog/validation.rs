//! Field checks shared by every item constructor
//!
//! Constructors are the only place catalog data is validated. Each check
//! returns the first violated rule for a single field; callers run them in a
//! fixed order (text fields first, then numeric ranges) and stop at the
//! first failure.

use thiserror::Error;

/// A rejected constructor argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace only
    #[error("{field} must not be empty")]
    Blank { field: &'static str },

    /// A numeric field fell outside its inclusive range
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    /// A numeric field with only a lower bound was too small
    #[error("{field} must be at least {min} (got {value})")]
    TooSmall {
        field: &'static str,
        value: i32,
        min: i32,
    },
}

impl ValidationError {
    /// Name of the field that failed
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Blank { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooSmall { field, .. } => field,
        }
    }
}

/// Trim `value` and reject it if nothing is left
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn in_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<i32, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

pub(crate) fn at_least(field: &'static str, value: i32, min: i32) -> Result<i32, ValidationError> {
    if value < min {
        return Err(ValidationError::TooSmall { field, value, min });
    }
    Ok(value)
}
