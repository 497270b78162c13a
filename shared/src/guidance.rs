//! Health guidance derived from an estimate
//!
//! Two independent classifications: a waist-to-hip banner and a suggestion
//! based on how far the current weight sits from the range midpoint.

use crate::estimator::{
    central_adiposity, compute, BodyType, Gender, IdealWeightEstimate, IdealWeightInput,
};
use serde::{Deserialize, Serialize};

/// Distance from the midpoint (kg) beyond which a suggestion is shown
pub const WEIGHT_DELTA_THRESHOLD_KG: f64 = 3.0;

/// Display band for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
}

// ============================================================================
// WHR Banner
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhrAssessment {
    CentralFatConcentration,
    Healthy,
}

impl WhrAssessment {
    pub fn message(&self) -> &'static str {
        match self {
            WhrAssessment::CentralFatConcentration => {
                "Your WHR indicates central fat concentration. Consider fat loss strategies."
            }
            WhrAssessment::Healthy => "Your WHR is within a healthy range.",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            WhrAssessment::CentralFatConcentration => Severity::Warning,
            WhrAssessment::Healthy => Severity::Info,
        }
    }
}

pub fn assess_whr(gender: Gender, whr: f64) -> WhrAssessment {
    if central_adiposity(gender, whr) {
        WhrAssessment::CentralFatConcentration
    } else {
        WhrAssessment::Healthy
    }
}

// ============================================================================
// Weight Delta
// ============================================================================

/// Where the current weight sits relative to the range midpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "position", rename_all = "snake_case")]
pub enum WeightDelta {
    AboveMidpoint { delta_kg: f64 },
    /// `delta_kg` is the absolute distance
    BelowMidpoint { delta_kg: f64 },
    NearIdeal,
}

impl WeightDelta {
    pub fn message(&self) -> String {
        match self {
            WeightDelta::AboveMidpoint { delta_kg } => format!(
                "You are approximately {:.1} kg above the midpoint. Try light cardio and calorie control.",
                delta_kg
            ),
            WeightDelta::BelowMidpoint { delta_kg } => format!(
                "You are approximately {:.1} kg below the midpoint. Consider healthy weight gain.",
                delta_kg
            ),
            WeightDelta::NearIdeal => {
                "You're near your ideal weight! Keep up the good work.".to_string()
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            WeightDelta::NearIdeal => Severity::Success,
            _ => Severity::Info,
        }
    }
}

/// Classify `current - midpoint` against the ±3 kg band (strict)
pub fn classify_weight_delta(current_weight_kg: f64, estimate: &IdealWeightEstimate) -> WeightDelta {
    let delta = current_weight_kg - estimate.midpoint_kg();
    if delta > WEIGHT_DELTA_THRESHOLD_KG {
        WeightDelta::AboveMidpoint { delta_kg: delta }
    } else if delta < -WEIGHT_DELTA_THRESHOLD_KG {
        WeightDelta::BelowMidpoint { delta_kg: delta.abs() }
    } else {
        WeightDelta::NearIdeal
    }
}

// ============================================================================
// Report
// ============================================================================

/// A message with its display band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub severity: Severity,
    pub message: String,
}

/// Everything the form shows after one "Calculate" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightReport {
    pub ideal_min_kg: f64,
    pub ideal_max_kg: f64,
    pub whr: f64,
    /// WHR formatted to two decimals
    pub whr_display: String,
    pub headline: Banner,
    pub whr_assessment: WhrAssessment,
    pub whr_banner: Banner,
    pub weight_delta: WeightDelta,
    pub weight_banner: Banner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
}

/// Run the estimator once and derive both guidance bands
pub fn build_report(input: &IdealWeightInput, body_type: Option<BodyType>) -> IdealWeightReport {
    let estimate = compute(input);
    let whr_assessment = assess_whr(input.gender, estimate.whr);
    let weight_delta = classify_weight_delta(input.weight_kg, &estimate);

    IdealWeightReport {
        ideal_min_kg: estimate.ideal_min_kg,
        ideal_max_kg: estimate.ideal_max_kg,
        whr: estimate.whr,
        whr_display: format!("{:.2}", estimate.whr),
        headline: Banner {
            severity: Severity::Success,
            message: format!(
                "Your estimated ideal weight range is: {:.1} kg – {:.1} kg",
                estimate.ideal_min_kg, estimate.ideal_max_kg
            ),
        },
        whr_assessment,
        whr_banner: Banner {
            severity: whr_assessment.severity(),
            message: whr_assessment.message().to_string(),
        },
        weight_delta,
        weight_banner: Banner {
            severity: weight_delta.severity(),
            message: weight_delta.message(),
        },
        body_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::ActivityLevel;
    use proptest::prelude::*;
    use rstest::rstest;

    fn scenario_input(weight_kg: f64) -> IdealWeightInput {
        IdealWeightInput {
            age_years: 25,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg,
            waist_cm: 80.0,
            hip_cm: 95.0,
            activity: ActivityLevel::Light.into(),
        }
    }

    fn range(ideal_min_kg: f64, ideal_max_kg: f64) -> IdealWeightEstimate {
        IdealWeightEstimate {
            ideal_min_kg,
            ideal_max_kg,
            whr: 0.84,
        }
    }

    #[rstest]
    #[case(Gender::Male, 0.95, WhrAssessment::CentralFatConcentration)]
    #[case(Gender::Male, 0.9, WhrAssessment::Healthy)]
    #[case(Gender::Female, 0.86, WhrAssessment::CentralFatConcentration)]
    #[case(Gender::Female, 0.85, WhrAssessment::Healthy)]
    fn test_assess_whr(#[case] gender: Gender, #[case] whr: f64, #[case] expected: WhrAssessment) {
        assert_eq!(assess_whr(gender, whr), expected);
    }

    #[test]
    fn test_whr_banner_severity() {
        assert_eq!(WhrAssessment::CentralFatConcentration.severity(), Severity::Warning);
        assert_eq!(WhrAssessment::Healthy.severity(), Severity::Info);
    }

    #[test]
    fn test_weight_delta_boundaries_are_strict() {
        // midpoint of 50..60 is 55
        assert_eq!(classify_weight_delta(58.0, &range(50.0, 60.0)), WeightDelta::NearIdeal);
        assert_eq!(classify_weight_delta(52.0, &range(50.0, 60.0)), WeightDelta::NearIdeal);
        assert_eq!(
            classify_weight_delta(58.5, &range(50.0, 60.0)),
            WeightDelta::AboveMidpoint { delta_kg: 3.5 }
        );
        assert_eq!(
            classify_weight_delta(51.5, &range(50.0, 60.0)),
            WeightDelta::BelowMidpoint { delta_kg: 3.5 }
        );
    }

    #[test]
    fn test_weight_delta_messages() {
        assert_eq!(
            WeightDelta::AboveMidpoint { delta_kg: 7.26 }.message(),
            "You are approximately 7.3 kg above the midpoint. Try light cardio and calorie control."
        );
        assert_eq!(
            WeightDelta::BelowMidpoint { delta_kg: 4.0 }.message(),
            "You are approximately 4.0 kg below the midpoint. Consider healthy weight gain."
        );
        assert_eq!(WeightDelta::NearIdeal.severity(), Severity::Success);
    }

    #[test]
    fn test_report_default_form_values() {
        // Form defaults: male, 25, 170 cm, 70 kg, waist 80, hip 95, light
        let report = build_report(&scenario_input(70.0), None);

        assert_eq!(report.ideal_min_kg, 53.5);
        assert_eq!(report.ideal_max_kg, 72.0);
        assert_eq!(report.whr_display, "0.84");
        assert_eq!(
            report.headline.message,
            "Your estimated ideal weight range is: 53.5 kg – 72.0 kg"
        );
        assert_eq!(report.headline.severity, Severity::Success);
        assert_eq!(report.whr_assessment, WhrAssessment::Healthy);
        assert_eq!(report.whr_banner.message, "Your WHR is within a healthy range.");
        // 70 - 62.75 = 7.25
        match report.weight_delta {
            WeightDelta::AboveMidpoint { delta_kg } => assert!((delta_kg - 7.25).abs() < 1e-9),
            other => panic!("expected above midpoint, got {:?}", other),
        }
        assert!(report.body_type.is_none());
    }

    #[test]
    fn test_report_echoes_body_type_without_changing_estimate() {
        let plain = build_report(&scenario_input(62.0), None);
        let with_type = build_report(&scenario_input(62.0), Some(BodyType::Endomorph));

        assert_eq!(with_type.body_type, Some(BodyType::Endomorph));
        assert_eq!(plain.ideal_min_kg, with_type.ideal_min_kg);
        assert_eq!(plain.ideal_max_kg, with_type.ideal_max_kg);
        assert_eq!(with_type.weight_delta, WeightDelta::NearIdeal);
    }

    #[test]
    fn test_report_serializes_tagged_delta() {
        let report = build_report(&scenario_input(55.0), None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["weight_delta"]["position"], "below_midpoint");
        assert_eq!(json["whr_banner"]["severity"], "info");
        assert!(json.get("body_type").is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: reported delta magnitude always exceeds the threshold
        #[test]
        fn prop_delta_outside_band(weight in 30.0f64..=200.0) {
            match classify_weight_delta(weight, &range(53.5, 72.0)) {
                WeightDelta::AboveMidpoint { delta_kg } | WeightDelta::BelowMidpoint { delta_kg } => {
                    prop_assert!(delta_kg > WEIGHT_DELTA_THRESHOLD_KG);
                }
                WeightDelta::NearIdeal => {
                    prop_assert!((weight - 62.75).abs() <= WEIGHT_DELTA_THRESHOLD_KG);
                }
            }
        }
    }
}
