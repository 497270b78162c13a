//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ideal_weight_shared::validation::get_field_display_label;
use ideal_weight_shared::{ErrorDetail, ErrorResponse, EstimatorError};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { field: Option<String>, message: String },

    #[error("Invalid value: {message}")]
    InvalidEnum { field: String, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }
}

impl From<EstimatorError> for ApiError {
    fn from(err: EstimatorError) -> Self {
        match err {
            EstimatorError::InvalidInput { field, reason } => ApiError::Validation {
                message: format!("{}: {}", get_field_display_label(&field), reason),
                field: Some(field),
            },
            EstimatorError::InvalidEnum {
                field,
                value,
                expected,
            } => ApiError::InvalidEnum {
                message: format!(
                    "{}: invalid value '{}'. Must be one of: {}",
                    get_field_display_label(&field),
                    value,
                    expected
                ),
                field,
            },
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        // Report fields in a stable order
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();

        match fields.first() {
            Some(field) => ApiError::validation(
                field,
                format!("{} is out of range", get_field_display_label(field)),
            ),
            None => ApiError::Validation {
                field: None,
                message: errors.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match self {
            ApiError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::InvalidEnum { field, message } => {
                (StatusCode::BAD_REQUEST, "INVALID_ENUM", message, Some(field))
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::validation("age", "Age is out of range");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal(anyhow::anyhow!("boom"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_estimator_error_mapping() {
        let err: ApiError = EstimatorError::invalid_enum("gender", "x", &["male", "female"]).into();
        assert!(matches!(err, ApiError::InvalidEnum { ref field, .. } if field == "gender"));

        let err: ApiError = EstimatorError::invalid_input("hip_cm", "must not be zero").into();
        match err {
            ApiError::Validation { field, message } => {
                assert_eq!(field.as_deref(), Some("hip_cm"));
                assert_eq!(message, "Hip Circumference (cm): must not be zero");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_enum_error_message_names_field_once() {
        let err: ApiError =
            EstimatorError::invalid_enum("body_type", "robot", &["ectomorph", "mesomorph"]).into();
        match err {
            ApiError::InvalidEnum { field, message } => {
                assert_eq!(field, "body_type");
                assert_eq!(
                    message,
                    "Body Type: invalid value 'robot'. Must be one of: ectomorph, mesomorph"
                );
                assert!(!message.contains("body_type"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
