//! Shared constants.

/// Decimal places used when reporting discovered values.
pub const DEFAULT_PRECISION: usize = 4;

/// Upper bound accepted for `report.precision`.
pub const MAX_PRECISION: usize = 12;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "SHRINKAGE_LOG";

/// Filter used when `SHRINKAGE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "shrinkage=warn";

/// Field separator between the expected and actual columns.
pub const FIELD_SEPARATOR: char = ' ';
