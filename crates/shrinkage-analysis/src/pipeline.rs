//! End-to-end run: load, estimate, simulate, estimate again, report.

use std::io::{BufRead, Write};
use std::path::Path;

use shrinkage_core::config::ShrinkageConfig;
use shrinkage_core::errors::{LoadError, LoadResult, PipelineError};
use shrinkage_core::Measurement;

use crate::estimator;
use crate::loader;
use crate::report::Summary;
use crate::simulator;

pub const STAGE_SHRINKAGE: &str = "shrinkage";
pub const STAGE_ADJUSTMENT: &str = "adjustment";
pub const STAGE_SIMULATED_ADJUSTMENT: &str = "simulated adjustment";

/// Compute the three discovered values from loaded measurements.
pub fn analyze(measurements: &[Measurement]) -> Result<Summary, PipelineError> {
    let shrinkages: Vec<f64> = measurements.iter().map(Measurement::shrinkage).collect();
    let shrinkage = estimate_stage(STAGE_SHRINKAGE, &shrinkages)?;

    let adjustments: Vec<f64> = measurements.iter().map(Measurement::adjustment).collect();
    let adjustment = estimate_stage(STAGE_ADJUSTMENT, &adjustments)?;

    let simulated = simulator::simulate(measurements, shrinkage);
    let simulated_adjustments: Vec<f64> =
        simulated.iter().map(Measurement::adjustment).collect();
    let simulated_adjustment =
        estimate_stage(STAGE_SIMULATED_ADJUSTMENT, &simulated_adjustments)?;

    Ok(Summary {
        shrinkage,
        adjustment,
        simulated_adjustment,
    })
}

/// Run against a file, writing line diagnostics and the result line to `out`.
pub fn run_file<W: Write>(
    path: &Path,
    config: &ShrinkageConfig,
    out: &mut W,
) -> Result<Summary, PipelineError> {
    let _span = tracing::info_span!("shrinkage_run", path = %path.display()).entered();
    ShrinkageConfig::validate(config)?;

    let loaded = loader::load_file(path, &config.loader);
    finish(loaded, config, out)
}

/// Run against any buffered reader, writing diagnostics and the result to `out`.
pub fn run_reader<R: BufRead, W: Write>(
    reader: R,
    config: &ShrinkageConfig,
    out: &mut W,
) -> Result<Summary, PipelineError> {
    let _span = tracing::info_span!("shrinkage_run").entered();
    ShrinkageConfig::validate(config)?;

    let loaded = loader::load_reader(reader, &config.loader);
    finish(loaded, config, out)
}

fn finish<W: Write>(
    loaded: Result<LoadResult<Vec<Measurement>>, LoadError>,
    config: &ShrinkageConfig,
    out: &mut W,
) -> Result<Summary, PipelineError> {
    // Diagnostics precede any fatal load or estimate failure.
    let loaded = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            write_diagnostics(err.skipped(), out)?;
            return Err(err.into());
        }
    };
    write_diagnostics(&loaded.errors, out)?;

    let summary = analyze(&loaded.data)?;
    tracing::info!(
        measurements_loaded = loaded.data.len(),
        lines_skipped = loaded.error_count(),
        shrinkage = summary.shrinkage,
        adjustment = summary.adjustment,
        simulated_adjustment = summary.simulated_adjustment,
        "run complete"
    );

    writeln!(out, "{}", summary.render(&config.report)).map_err(PipelineError::Output)?;
    Ok(summary)
}

fn write_diagnostics<W: Write>(errors: &[LoadError], out: &mut W) -> Result<(), PipelineError> {
    for err in errors {
        writeln!(out, "{err}").map_err(PipelineError::Output)?;
    }
    Ok(())
}

fn estimate_stage(stage: &'static str, values: &[f64]) -> Result<f64, PipelineError> {
    let _span = tracing::debug_span!("estimate", stage).entered();
    estimator::least_deviation(values).map_err(|e| PipelineError::estimate(stage, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrinkage_core::errors::EstimateError;

    #[test]
    fn analyze_empty_is_empty_dataset() {
        let err = analyze(&[]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Estimate {
                stage: STAGE_SHRINKAGE,
                source: EstimateError::Empty,
            }
        ));
    }

    #[test]
    fn analyze_single_measurement() {
        let summary = analyze(&[Measurement::new(10.0, 8.0)]).unwrap();
        assert!((summary.shrinkage - 0.8).abs() < 1e-12);
        assert!((summary.adjustment - 2.0).abs() < 1e-12);
        assert!((summary.simulated_adjustment - 2.0).abs() < 1e-9);
    }
}
