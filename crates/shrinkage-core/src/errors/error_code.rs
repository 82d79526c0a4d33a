//! ShrinkageErrorCode trait and the stable code strings.

/// Every error enum implements this to provide a structured code string
/// for logs and process-level reporting.
pub trait ShrinkageErrorCode {
    /// Returns the error code string (e.g., "EMPTY_DATASET").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_LINE: &str = "INVALID_LINE";
pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
pub const ZERO_EXPECTED: &str = "ZERO_EXPECTED";
pub const IO_ERROR: &str = "IO_ERROR";
pub const EMPTY_DATASET: &str = "EMPTY_DATASET";
pub const NON_FINITE_VALUE: &str = "NON_FINITE_VALUE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
