//! API request and response types

use crate::errors::EstimatorResult;
use crate::estimator::{ActivityInput, BodyType, Gender, IdealWeightInput};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Ideal Weight Types
// ============================================================================

/// Calculator submission as sent by a form
///
/// Numeric bounds match the form widgets. Enumerated fields arrive as
/// free text and are parsed case-insensitively by [`IdealWeightRequest::into_input`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IdealWeightRequest {
    #[validate(range(min = 10, max = 100))]
    pub age: u32,
    pub gender: String,
    #[validate(range(min = 100.0, max = 250.0))]
    pub height_cm: f64,
    /// Current weight
    #[validate(range(min = 30.0, max = 200.0))]
    pub weight_kg: f64,
    #[validate(range(min = 40.0, max = 200.0))]
    pub waist_cm: f64,
    #[validate(range(min = 40.0, max = 200.0))]
    pub hip_cm: f64,
    pub activity_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
}

impl IdealWeightRequest {
    /// Parse the enumerated fields into a typed input
    ///
    /// Gender and body type must be known values. An unknown activity level
    /// is kept with no adjustment unless `strict_activity` is set.
    pub fn into_input(self, strict_activity: bool) -> EstimatorResult<(IdealWeightInput, Option<BodyType>)> {
        let gender: Gender = self.gender.parse()?;
        let activity = if strict_activity {
            ActivityInput::parse_strict(&self.activity_level)?
        } else {
            ActivityInput::parse(&self.activity_level)
        };
        let body_type = self
            .body_type
            .as_deref()
            .map(str::parse::<BodyType>)
            .transpose()?;

        let input = IdealWeightInput {
            age_years: self.age,
            gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            waist_cm: self.waist_cm,
            hip_cm: self.hip_cm,
            activity,
        };
        Ok((input, body_type))
    }
}
