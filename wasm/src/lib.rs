//! Ideal Weight WASM Module
//!
//! WebAssembly bindings so a browser form can run the estimator locally,
//! without a round trip to the backend.

use ideal_weight_shared::{
    build_report, validation::validate_input, ActivityInput, BodyType, EstimatorError, Gender,
    IdealWeightInput, IdealWeightReport,
};
use wasm_bindgen::prelude::*;

/// Parse and validate form fields into a typed input
fn parse_form(
    age_years: u32,
    gender: &str,
    height_cm: f64,
    weight_kg: f64,
    waist_cm: f64,
    hip_cm: f64,
    activity_level: &str,
) -> Result<IdealWeightInput, EstimatorError> {
    let input = IdealWeightInput {
        age_years,
        gender: gender.parse::<Gender>()?,
        height_cm,
        weight_kg,
        waist_cm,
        hip_cm,
        activity: ActivityInput::parse(activity_level),
    };
    // Values from JS may be NaN or out of range
    validate_input(&input)?;
    Ok(input)
}

#[allow(clippy::too_many_arguments)]
fn report_for(
    age_years: u32,
    gender: &str,
    height_cm: f64,
    weight_kg: f64,
    waist_cm: f64,
    hip_cm: f64,
    activity_level: &str,
    body_type: Option<String>,
) -> Result<IdealWeightReport, EstimatorError> {
    let input = parse_form(
        age_years,
        gender,
        height_cm,
        weight_kg,
        waist_cm,
        hip_cm,
        activity_level,
    )?;
    let body_type = body_type
        .as_deref()
        .map(str::parse::<BodyType>)
        .transpose()?;
    Ok(build_report(&input, body_type))
}

/// Estimate the ideal weight range and guidance
///
/// Returns the report as a JSON string.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn estimate_ideal_weight(
    age_years: u32,
    gender: &str,
    height_cm: f64,
    weight_kg: f64,
    waist_cm: f64,
    hip_cm: f64,
    activity_level: &str,
    body_type: Option<String>,
) -> Result<String, JsError> {
    let report = report_for(
        age_years,
        gender,
        height_cm,
        weight_kg,
        waist_cm,
        hip_cm,
        activity_level,
        body_type,
    )
    .map_err(|e| JsError::new(&e.to_string()))?;

    serde_json::to_string(&report).map_err(|e| JsError::new(&e.to_string()))
}

/// Waist-to-hip ratio; 0.0 when the hip measurement is not a positive number
#[wasm_bindgen]
pub fn waist_to_hip_ratio(waist_cm: f64, hip_cm: f64) -> f64 {
    if hip_cm.is_nan() || hip_cm <= 0.0 {
        return 0.0;
    }
    ideal_weight_shared::waist_to_hip_ratio(waist_cm, hip_cm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideal_weight_shared::WhrAssessment;

    #[test]
    fn test_report_for_default_form() {
        let report = report_for(25, "Male", 170.0, 70.0, 80.0, 95.0, "Light", None).unwrap();
        assert_eq!(report.ideal_min_kg, 53.5);
        assert_eq!(report.ideal_max_kg, 72.0);
        assert_eq!(report.whr_assessment, WhrAssessment::Healthy);
    }

    #[test]
    fn test_report_for_rejects_bad_values() {
        assert!(report_for(25, "Male", 170.0, 70.0, 80.0, f64::NAN, "Light", None).is_err());
        assert!(report_for(25, "Male", 170.0, 70.0, 80.0, 30.0, "Light", None).is_err());
        assert!(report_for(5, "Male", 170.0, 70.0, 80.0, 95.0, "Light", None).is_err());
        assert!(report_for(25, "other", 170.0, 70.0, 80.0, 95.0, "Light", None).is_err());
        assert!(
            report_for(25, "Male", 170.0, 70.0, 80.0, 95.0, "Light", Some("round".into())).is_err()
        );
    }

    #[test]
    fn test_report_serializes() {
        let report = report_for(60, "female", 170.0, 70.0, 80.0, 90.0, "sedentary", None).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"ideal_max_kg\":62.2"));
    }

    #[test]
    fn test_waist_to_hip_ratio() {
        assert!((waist_to_hip_ratio(80.0, 95.0) - 0.8421).abs() < 1e-4);
        assert_eq!(waist_to_hip_ratio(80.0, 0.0), 0.0);
        assert_eq!(waist_to_hip_ratio(80.0, -5.0), 0.0);
        assert_eq!(waist_to_hip_ratio(80.0, f64::NAN), 0.0);
    }
}
