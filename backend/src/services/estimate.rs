//! Ideal weight service - turns a form submission into a report

use crate::config::EstimatorConfig;
use crate::error::ApiError;
use ideal_weight_shared::{build_report, IdealWeightReport, IdealWeightRequest};
use tracing::debug;
use validator::Validate;

/// Stateless estimate service
pub struct EstimateService;

impl EstimateService {
    /// Validate the request, run the estimator once and derive guidance
    pub fn estimate(
        req: IdealWeightRequest,
        config: &EstimatorConfig,
    ) -> Result<IdealWeightReport, ApiError> {
        // JSON numbers are always finite, so the range checks are sufficient
        req.validate()?;

        let (input, body_type) = req.into_input(config.strict_activity)?;

        let report = build_report(&input, body_type);

        debug!(
            age = input.age_years,
            gender = %input.gender,
            activity = %input.activity,
            ideal_min_kg = report.ideal_min_kg,
            ideal_max_kg = report.ideal_max_kg,
            whr = report.whr,
            "Computed ideal weight estimate"
        );

        Ok(report)
    }
}
