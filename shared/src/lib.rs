//! Ideal Weight Shared Library
//!
//! This crate contains the ideal weight estimator, its guidance messages,
//! and the request types shared by the backend and WASM modules.

pub mod errors;
pub mod estimator;
pub mod guidance;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use estimator::*;
pub use guidance::*;
pub use types::{ErrorDetail, ErrorResponse, IdealWeightRequest};
