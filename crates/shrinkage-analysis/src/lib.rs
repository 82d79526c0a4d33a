//! # shrinkage-analysis
//!
//! The measurement pipeline: load expected/actual pairs, pick the
//! least-deviating center of their shrinkages and adjustments, re-measure
//! with the discovered shrinkage, and report.

pub mod estimator;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod simulator;

pub use estimator::{least_deviation, CenterKind, Estimate};
pub use loader::{load_file, load_reader};
pub use pipeline::{analyze, run_file, run_reader};
pub use report::Summary;
pub use simulator::simulate;
