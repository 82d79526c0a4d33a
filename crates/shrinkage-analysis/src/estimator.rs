//! Least-deviation center selection.
//!
//! Mean and median are both computed; whichever has the smaller sum of
//! absolute deviations wins. Ties go to the median.

use statrs::statistics::{Data, Median};

use shrinkage_core::errors::EstimateError;

/// Which center was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterKind {
    Mean,
    Median,
}

impl CenterKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
        }
    }
}

/// Full breakdown of one estimator run.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub mean: f64,
    pub median: f64,
    pub mean_deviation: f64,
    pub median_deviation: f64,
    pub method: CenterKind,
}

impl Estimate {
    /// The selected center.
    pub fn value(&self) -> f64 {
        match self.method {
            CenterKind::Mean => self.mean,
            CenterKind::Median => self.median,
        }
    }

    /// Total absolute deviation of the selected center.
    pub fn deviation(&self) -> f64 {
        match self.method {
            CenterKind::Mean => self.mean_deviation,
            CenterKind::Median => self.median_deviation,
        }
    }
}

/// Return the mean or median of `values`, whichever deviates least.
pub fn least_deviation(values: &[f64]) -> Result<f64, EstimateError> {
    estimate(values).map(|e| e.value())
}

/// Compute both centers and their deviations, and select one.
pub fn estimate(values: &[f64]) -> Result<Estimate, EstimateError> {
    check_values(values)?;

    let mean = mean(values);
    let median = median(values);
    let mean_deviation = deviation(mean, values);
    let median_deviation = deviation(median, values);

    let method = if mean_deviation < median_deviation {
        CenterKind::Mean
    } else {
        CenterKind::Median
    };

    tracing::debug!(
        count = values.len(),
        mean,
        median,
        mean_deviation,
        median_deviation,
        estimate_method = method.name(),
        "least-deviation estimate"
    );

    Ok(Estimate {
        mean,
        median,
        mean_deviation,
        median_deviation,
        method,
    })
}

/// Arithmetic mean. `values` must be non-empty.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median over a sorted private copy; the caller's slice is untouched.
/// `values` must be non-empty.
pub fn median(values: &[f64]) -> f64 {
    Data::new(values.to_vec()).median()
}

/// Sum of absolute deviations of `values` from `center`.
pub fn deviation(center: f64, values: &[f64]) -> f64 {
    values.iter().map(|v| (v - center).abs()).sum()
}

fn check_values(values: &[f64]) -> Result<(), EstimateError> {
    if values.is_empty() {
        return Err(EstimateError::Empty);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EstimateError::NonFinite { index, value });
    }
    Ok(())
}
