//! # shrinkage-core
//!
//! Foundation crate for the shrinkage estimator.
//! Defines the measurement type, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ShrinkageConfig;
pub use errors::{EstimateError, LoadError, PipelineError};
pub use measurement::Measurement;
