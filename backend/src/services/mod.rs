//! Business logic services
//!
//! Services sit between the HTTP routes and the shared estimator.

pub mod estimate;

pub use estimate::EstimateService;
