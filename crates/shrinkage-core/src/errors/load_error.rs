//! Loader errors and non-fatal error collection.

use std::path::PathBuf;

use super::error_code::{self, ShrinkageErrorCode};

/// Errors that can occur while loading measurements.
///
/// Per-line variants are recoverable: the loader records them and moves on.
/// `Open` and `Read` abort the load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid line: {line}")]
    InvalidLine { line_number: usize, line: String },

    #[error("Error parsing expected value: {token}")]
    InvalidExpected { line_number: usize, token: String },

    #[error("Error parsing actual value: {token}")]
    InvalidActual { line_number: usize, token: String },

    #[error("Zero expected value: {line}")]
    ZeroExpected { line_number: usize, line: String },

    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input at line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: std::io::Error,
        /// Per-line errors collected before the read failed.
        skipped: Vec<LoadError>,
    },
}

impl LoadError {
    /// Whether this error aborts the load rather than skipping one line.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Read { .. })
    }

    /// Per-line errors recorded before a fatal read failure.
    pub fn skipped(&self) -> &[LoadError] {
        match self {
            Self::Read { skipped, .. } => skipped,
            _ => &[],
        }
    }

    /// 1-based line number the error refers to, if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::InvalidLine { line_number, .. }
            | Self::InvalidExpected { line_number, .. }
            | Self::InvalidActual { line_number, .. }
            | Self::ZeroExpected { line_number, .. }
            | Self::Read { line_number, .. } => Some(*line_number),
            Self::Open { .. } => None,
        }
    }
}

impl ShrinkageErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLine { .. } => error_code::INVALID_LINE,
            Self::InvalidExpected { .. } | Self::InvalidActual { .. } => {
                error_code::INVALID_NUMBER
            }
            Self::ZeroExpected { .. } => error_code::ZERO_EXPECTED,
            Self::Open { .. } | Self::Read { .. } => error_code::IO_ERROR,
        }
    }
}

/// Result of a load that accumulates non-fatal per-line errors.
/// The data is usable even when some lines were skipped.
#[derive(Debug, Default)]
pub struct LoadResult<T: Default = ()> {
    /// The successfully loaded data.
    pub data: T,
    /// Per-line errors collected during the load, in input order.
    pub errors: Vec<LoadError>,
}

impl<T: Default> LoadResult<T> {
    /// Create a new result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Record a skipped line.
    pub fn add_error(&mut self, error: LoadError) {
        self.errors.push(error);
    }

    /// Returns true if no line was skipped.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of skipped lines.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
