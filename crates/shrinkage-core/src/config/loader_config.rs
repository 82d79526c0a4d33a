//! Loader configuration.

use serde::{Deserialize, Serialize};

/// Configuration for reading measurement files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoaderConfig {
    /// Skip lines whose expected value is zero. Default: true.
    pub skip_zero_expected: Option<bool>,
}

impl LoaderConfig {
    /// Returns whether zero-expected lines are skipped, defaulting to true.
    pub fn effective_skip_zero_expected(&self) -> bool {
        self.skip_zero_expected.unwrap_or(true)
    }
}
