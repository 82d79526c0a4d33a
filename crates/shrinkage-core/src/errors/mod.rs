//! Error handling for shrinkage.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod estimate_error;
pub mod load_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use error_code::ShrinkageErrorCode;
pub use estimate_error::EstimateError;
pub use load_error::{LoadError, LoadResult};
pub use pipeline_error::PipelineError;
