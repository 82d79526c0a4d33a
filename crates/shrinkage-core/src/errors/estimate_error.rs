//! Estimator errors.

use super::error_code::{self, ShrinkageErrorCode};

/// Errors raised by the least-deviation estimator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("cannot estimate a central value of an empty dataset")]
    Empty,

    #[error("value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

impl ShrinkageErrorCode for EstimateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => error_code::EMPTY_DATASET,
            Self::NonFinite { .. } => error_code::NON_FINITE_VALUE,
        }
    }
}
