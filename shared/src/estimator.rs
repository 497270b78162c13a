//! Ideal weight range estimation
//!
//! Maps age, gender, height, waist/hip circumference and activity level to
//! an ideal weight range by adjusting a baseline BMI band.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: `compute` has no side effects and no failure path
//! 2. **Band, then Weight**: Adjustments act on the BMI band; the gender
//!    factor scales the final weight, never the band
//! 3. **Type Safety**: Gender and activity are enums, not strings

use crate::errors::{EstimatorError, EstimatorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound of the baseline BMI band
pub const BASELINE_BMI_MIN: f64 = 18.5;
/// Upper bound of the baseline BMI band
pub const BASELINE_BMI_MAX: f64 = 24.9;
/// Ages strictly above this shift the whole band up
pub const AGE_ADJUSTMENT_THRESHOLD: u32 = 50;
pub const AGE_ADJUSTMENT: f64 = 1.0;
/// Taken off the upper bound on central adiposity
pub const CENTRAL_ADIPOSITY_PENALTY: f64 = 1.0;
pub const MALE_WHR_THRESHOLD: f64 = 0.9;
pub const FEMALE_WHR_THRESHOLD: f64 = 0.85;
pub const FEMALE_WEIGHT_FACTOR: f64 = 0.9;
pub const MALE_WEIGHT_FACTOR: f64 = 1.0;

// ============================================================================
// Input Types
// ============================================================================

/// Gender used for the weight factor and WHR threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const VALID_VALUES: &'static [&'static str] = &["male", "female"];

    /// Multiplier applied to the final weight, not to the BMI band
    pub fn weight_factor(&self) -> f64 {
        match self {
            Gender::Male => MALE_WEIGHT_FACTOR,
            Gender::Female => FEMALE_WEIGHT_FACTOR,
        }
    }

    /// WHR above which central fat concentration is flagged
    pub fn whr_threshold(&self) -> f64 {
        match self {
            Gender::Male => MALE_WHR_THRESHOLD,
            Gender::Female => FEMALE_WHR_THRESHOLD,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(EstimatorError::invalid_enum("gender", s, Self::VALID_VALUES)),
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    #[default]
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const VALID_VALUES: &'static [&'static str] =
        &["sedentary", "light", "moderate", "active"];

    /// Additive adjustment to the upper BMI bound
    pub fn bmi_max_adjustment(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => -1.0,
            ActivityLevel::Light => 0.0,
            ActivityLevel::Moderate => 1.0,
            ActivityLevel::Active => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            _ => Err(EstimatorError::invalid_enum(
                "activity_level",
                s,
                Self::VALID_VALUES,
            )),
        }
    }
}

/// Activity level as submitted by a caller
///
/// Labels outside the known set are kept and contribute no adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityInput {
    Known(ActivityLevel),
    Unrecognized(String),
}

impl ActivityInput {
    /// Lenient parse: never fails
    pub fn parse(label: &str) -> Self {
        label
            .parse::<ActivityLevel>()
            .map(ActivityInput::Known)
            .unwrap_or_else(|_| ActivityInput::Unrecognized(label.to_string()))
    }

    /// Strict parse: unknown labels are an `InvalidEnum` error
    pub fn parse_strict(label: &str) -> EstimatorResult<Self> {
        label.parse::<ActivityLevel>().map(ActivityInput::Known)
    }

    pub fn bmi_max_adjustment(&self) -> f64 {
        match self {
            ActivityInput::Known(level) => level.bmi_max_adjustment(),
            ActivityInput::Unrecognized(_) => 0.0,
        }
    }
}

impl From<ActivityLevel> for ActivityInput {
    fn from(level: ActivityLevel) -> Self {
        ActivityInput::Known(level)
    }
}

impl fmt::Display for ActivityInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityInput::Known(level) => write!(f, "{}", level),
            ActivityInput::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

/// Somatotype picked on the form. Echoed back, never used in the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl BodyType {
    pub const VALID_VALUES: &'static [&'static str] = &["ectomorph", "mesomorph", "endomorph"];
}

impl FromStr for BodyType {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ectomorph" => Ok(BodyType::Ectomorph),
            "mesomorph" => Ok(BodyType::Mesomorph),
            "endomorph" => Ok(BodyType::Endomorph),
            _ => Err(EstimatorError::invalid_enum("body_type", s, Self::VALID_VALUES)),
        }
    }
}

/// Typed parameter set for one estimate
#[derive(Debug, Clone, PartialEq)]
pub struct IdealWeightInput {
    pub age_years: u32,
    pub gender: Gender,
    pub height_cm: f64,
    /// Current weight; only feeds the delta guidance, never the range
    pub weight_kg: f64,
    pub waist_cm: f64,
    pub hip_cm: f64,
    pub activity: ActivityInput,
}

// ============================================================================
// Estimation
// ============================================================================

/// Estimated ideal weight range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightEstimate {
    /// Lower bound, rounded to 0.1 kg
    pub ideal_min_kg: f64,
    /// Upper bound, rounded to 0.1 kg
    pub ideal_max_kg: f64,
    /// Waist-to-hip ratio, unrounded
    pub whr: f64,
}

impl IdealWeightEstimate {
    /// Centre of the range, the reference for the weight delta
    pub fn midpoint_kg(&self) -> f64 {
        (self.ideal_min_kg + self.ideal_max_kg) / 2.0
    }
}

/// Adjusted BMI band before conversion to weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiBand {
    pub min: f64,
    pub max: f64,
}

/// Round to one decimal place, ties away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn waist_to_hip_ratio(waist_cm: f64, hip_cm: f64) -> f64 {
    waist_cm / hip_cm
}

/// Whether the WHR exceeds the gender-specific threshold (strictly)
pub fn central_adiposity(gender: Gender, whr: f64) -> bool {
    whr > gender.whr_threshold()
}

/// Apply age, WHR and activity adjustments to the baseline band
///
/// Only the age adjustment touches the lower bound.
pub fn bmi_band(age_years: u32, gender: Gender, whr: f64, activity: &ActivityInput) -> BmiBand {
    let mut min = BASELINE_BMI_MIN;
    let mut max = BASELINE_BMI_MAX;

    if age_years > AGE_ADJUSTMENT_THRESHOLD {
        min += AGE_ADJUSTMENT;
        max += AGE_ADJUSTMENT;
    }

    if central_adiposity(gender, whr) {
        max -= CENTRAL_ADIPOSITY_PENALTY;
    }

    max += activity.bmi_max_adjustment();

    BmiBand { min, max }
}

/// Compute the ideal weight range
///
/// Performs no validation: inputs are expected to be within the form
/// domains. Use [`try_compute`] when that is not guaranteed.
///
/// Formula: weight = BMI × height(m)² × gender factor
pub fn compute(input: &IdealWeightInput) -> IdealWeightEstimate {
    let height_m = input.height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    let gender_factor = input.gender.weight_factor();
    let whr = waist_to_hip_ratio(input.waist_cm, input.hip_cm);

    let band = bmi_band(input.age_years, input.gender, whr, &input.activity);

    IdealWeightEstimate {
        ideal_min_kg: round_to_tenth(band.min * height_m_sq * gender_factor),
        ideal_max_kg: round_to_tenth(band.max * height_m_sq * gender_factor),
        whr,
    }
}

/// Compute after checking arithmetic preconditions
///
/// Rejects zero height or hip and any non-finite measurement. Domain
/// checks (e.g. age 10-100) live in [`crate::validation`].
pub fn try_compute(input: &IdealWeightInput) -> EstimatorResult<IdealWeightEstimate> {
    let measurements = [
        ("height_cm", input.height_cm),
        ("weight_kg", input.weight_kg),
        ("waist_cm", input.waist_cm),
        ("hip_cm", input.hip_cm),
    ];
    for (field, value) in measurements {
        if !value.is_finite() {
            return Err(EstimatorError::invalid_input(field, "must be a finite number"));
        }
    }
    if input.height_cm == 0.0 {
        return Err(EstimatorError::invalid_input("height_cm", "must not be zero"));
    }
    if input.hip_cm == 0.0 {
        return Err(EstimatorError::invalid_input("hip_cm", "must not be zero"));
    }

    Ok(compute(input))
}
