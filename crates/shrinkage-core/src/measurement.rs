//! The measurement value type.

/// One expected/actual pair with its derived shrinkage and adjustment.
///
/// Values are fixed at construction:
/// - `shrinkage = actual / expected`
/// - `adjustment = expected - actual`
///
/// Callers are expected to reject `expected == 0.0` before construction;
/// the loader does so, and simulated measurements reuse loaded `expected`
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    expected: f64,
    actual: f64,
    shrinkage: f64,
    adjustment: f64,
}

impl Measurement {
    /// Build a measurement from an expected and an actual value.
    pub fn new(expected: f64, actual: f64) -> Self {
        Self {
            expected,
            actual,
            shrinkage: actual / expected,
            adjustment: expected - actual,
        }
    }

    /// Re-measure with a known shrinkage factor: `actual = expected * shrinkage`.
    pub fn simulated(expected: f64, shrinkage: f64) -> Self {
        Self::new(expected, expected * shrinkage)
    }

    pub fn expected(&self) -> f64 {
        self.expected
    }

    pub fn actual(&self) -> f64 {
        self.actual
    }

    pub fn shrinkage(&self) -> f64 {
        self.shrinkage
    }

    pub fn adjustment(&self) -> f64 {
        self.adjustment
    }
}
