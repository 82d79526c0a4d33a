//! The result line.

use std::fmt;

use shrinkage_core::config::ReportConfig;
use shrinkage_core::constants::DEFAULT_PRECISION;

/// The three values a run discovers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub shrinkage: f64,
    pub adjustment: f64,
    pub simulated_adjustment: f64,
}

impl Summary {
    /// Format with `config`'s precision.
    pub fn render(&self, config: &ReportConfig) -> String {
        format_line(self, config.effective_precision())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_line(self, DEFAULT_PRECISION))
    }
}

fn format_line(summary: &Summary, precision: usize) -> String {
    format!(
        "Shrinkage: {:.p$}, Adjustment: {:.p$}, Simulated adjustment {:.p$}",
        summary.shrinkage,
        summary.adjustment,
        summary.simulated_adjustment,
        p = precision
    )
}
