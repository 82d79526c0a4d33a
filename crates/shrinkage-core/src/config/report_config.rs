//! Report formatting configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRECISION;

/// Configuration for the result line.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Digits after the decimal point. Default: 4.
    pub precision: Option<usize>,
}

impl ReportConfig {
    /// Returns the precision, defaulting to 4.
    pub fn effective_precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }
}
