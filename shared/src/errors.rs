//! Error types for the ideal weight estimator

use thiserror::Error;

/// Errors raised when the estimator is used outside a pre-validated form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid value '{value}' for {field}. Must be one of: {expected}")]
    InvalidEnum {
        field: String,
        value: String,
        expected: String,
    },
}

impl EstimatorError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        EstimatorError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_enum(field: &str, value: &str, expected: &[&str]) -> Self {
        EstimatorError::InvalidEnum {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            EstimatorError::InvalidInput { field, .. } => field,
            EstimatorError::InvalidEnum { field, .. } => field,
        }
    }
}

/// Result alias for fallible estimator operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;
