//! # Error Types
//!
//! Structured error types for calc_core. Every calculator reports failures
//! through [`CalcError`] so that a form shell can render one inline message
//! without knowing which calculator produced it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_in: f64) -> CalcResult<()> {
//!     if height_in <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "height_in".to_string(),
//!             value: height_in.to_string(),
//!             reason: "Height must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Each variant provides specific context about what went wrong,
/// so shells can show a precise message next to the offending field.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (not a number, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The formula is undefined for the given inputs (log of a
    /// non-positive number, division by zero, ...)
    #[error("Undefined result for {calculation}: {reason}")]
    DomainError { calculation: String, reason: String },

    /// A math expression could not be parsed
    #[error("Expression error at position {position}: {reason}")]
    ExpressionError { position: usize, reason: String },

    /// No calculator is registered under this slug
    #[error("Calculator not found: {slug}")]
    CalculatorNotFound { slug: String },

    /// Site configuration is invalid or unreadable
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DomainError
    pub fn domain(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create an ExpressionError
    pub fn expression(position: usize, reason: impl Into<String>) -> Self {
        CalcError::ExpressionError {
            position,
            reason: reason.into(),
        }
    }

    /// Create a CalculatorNotFound error
    pub fn calculator_not_found(slug: impl Into<String>) -> Self {
        CalcError::CalculatorNotFound { slug: slug.into() }
    }

    /// Create a ConfigError
    pub fn config(reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// The form field this error points at, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::MissingField { field } => Some(field),
            _ => None,
        }
    }

    /// Whether the user can fix this error by editing the form
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::DomainError { .. }
                | CalcError::ExpressionError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::ExpressionError { .. } => "EXPRESSION_ERROR",
            CalcError::CalculatorNotFound { .. } => "CALCULATOR_NOT_FOUND",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("height_in", "-5.0", "Height must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::domain("log", "x <= 0").error_code(), "DOMAIN_ERROR");
        assert_eq!(CalcError::calculator_not_found("nope").error_code(), "CALCULATOR_NOT_FOUND");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(CalcError::missing_field("waist").field(), Some("waist"));
        assert_eq!(CalcError::config("bad").field(), None);
    }

    #[test]
    fn test_user_errors() {
        assert!(CalcError::expression(3, "unexpected ')'").is_user_error());
        assert!(!CalcError::config("bad url").is_user_error());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::domain("Army Body Fat", "waist must exceed neck");
        assert_eq!(
            error.to_string(),
            "Undefined result for Army Body Fat: waist must exceed neck"
        );
    }
}
