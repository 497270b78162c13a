//! Input validation functions
//!
//! Mirrors the min/max bounds of the calculator form widgets. The estimator
//! itself never validates; callers outside the form run these first.

use crate::errors::EstimatorError;
use crate::estimator::IdealWeightInput;

pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const HEIGHT_CM_RANGE: (f64, f64) = (100.0, 250.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 200.0);
pub const CIRCUMFERENCE_CM_RANGE: (f64, f64) = (40.0, 200.0);

fn check_range(value: f64, (min, max): (f64, f64), name: &str, unit: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", name));
    }
    if value < min {
        return Err(format!("{} must be at least {} {}", name, min, unit));
    }
    if value > max {
        return Err(format!("{} must be at most {} {}", name, max, unit));
    }
    Ok(())
}

/// Validate age in years (10-100)
pub fn validate_age(age_years: u32) -> Result<(), String> {
    let (min, max) = AGE_RANGE;
    if age_years < min {
        return Err(format!("Age must be at least {} years", min));
    }
    if age_years > max {
        return Err(format!("Age must be at most {} years", max));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    check_range(height_cm, HEIGHT_CM_RANGE, "Height", "cm")
}

/// Validate current weight (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    check_range(weight_kg, WEIGHT_KG_RANGE, "Weight", "kg")
}

/// Validate a waist or hip circumference (in cm)
pub fn validate_circumference_cm(circumference_cm: f64) -> Result<(), String> {
    check_range(circumference_cm, CIRCUMFERENCE_CM_RANGE, "Circumference", "cm")
}

/// Check every numeric field of a typed input against the form domains
///
/// Stops at the first failing field.
pub fn validate_input(input: &IdealWeightInput) -> Result<(), EstimatorError> {
    let checks = [
        ("age", validate_age(input.age_years)),
        ("height_cm", validate_height_cm(input.height_cm)),
        ("weight_kg", validate_weight(input.weight_kg)),
        ("waist_cm", validate_circumference_cm(input.waist_cm)),
        ("hip_cm", validate_circumference_cm(input.hip_cm)),
    ];

    for (field, result) in checks {
        if let Err(msg) = result {
            return Err(EstimatorError::invalid_input(field, msg));
        }
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to the labels shown on the form
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "gender" => "Gender",
        "height" | "height_cm" => "Height (cm)",
        "weight" | "weight_kg" => "Current Weight (kg)",
        "waist" | "waist_cm" => "Waist Circumference (cm)",
        "hip" | "hip_cm" => "Hip Circumference (cm)",
        "activity_level" => "Activity Level",
        "body_type" => "Body Type",
        _ => field_name,
    }
}
