//! Top-level pipeline errors.

use super::error_code::{self, ShrinkageErrorCode};
use super::{ConfigError, EstimateError, LoadError};

/// Errors that terminate a run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Estimate error ({stage}): {source}")]
    Estimate {
        stage: &'static str,
        #[source]
        source: EstimateError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl PipelineError {
    /// Wrap an estimator failure with the stage it happened in.
    pub fn estimate(stage: &'static str, source: EstimateError) -> Self {
        Self::Estimate { stage, source }
    }
}

impl ShrinkageErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Estimate { source, .. } => source.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Output(_) => error_code::IO_ERROR,
        }
    }
}
