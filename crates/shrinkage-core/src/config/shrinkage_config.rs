//! Top-level shrinkage configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LoaderConfig, ReportConfig};
use crate::constants::MAX_PRECISION;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// The binary runs with `ShrinkageConfig::default()`; library callers may
/// load one from TOML. The estimator itself takes no configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShrinkageConfig {
    pub loader: LoaderConfig,
    pub report: ReportConfig,
}

impl ShrinkageConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    /// Unknown keys are silently ignored.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ShrinkageConfig) -> Result<(), ConfigError> {
        if let Some(precision) = config.report.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::ValidationFailed {
                    field: "report.precision".to_string(),
                    message: format!("must be at most {MAX_PRECISION}"),
                });
            }
        }
        Ok(())
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }
}
