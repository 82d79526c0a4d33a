//! Re-measure simulation with a discovered shrinkage factor.

use shrinkage_core::Measurement;

/// Re-measure every `expected` value with shrinkage factor `shrinkage`.
///
/// The output has the same length and order as `measurements`; each entry
/// has `actual = expected * shrinkage`, so its own shrinkage is the factor
/// and its adjustment is `expected * (1 - shrinkage)`.
pub fn simulate(measurements: &[Measurement], shrinkage: f64) -> Vec<Measurement> {
    measurements
        .iter()
        .map(|m| Measurement::simulated(m.expected(), shrinkage))
        .collect()
}
