//! End-to-end pipeline tests over in-memory and on-disk inputs.

use std::io::{self, Read};
use std::path::Path;

use shrinkage_analysis::pipeline::{self, STAGE_SHRINKAGE};
use shrinkage_core::errors::{EstimateError, LoadError, PipelineError};
use shrinkage_core::ShrinkageConfig;

fn run(input: &str) -> (Result<shrinkage_analysis::Summary, PipelineError>, String) {
    let mut out = Vec::new();
    let result = pipeline::run_reader(input.as_bytes(), &ShrinkageConfig::default(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn round_trip_scenario() {
    let (result, out) = run("10 8\n20 15\n30 25\n");
    let summary = result.unwrap();

    // Shrinkages [0.8, 0.75, 0.8333]: the median deviates less than the mean.
    assert!((summary.shrinkage - 0.8).abs() < 1e-12);
    // Adjustments [2, 5, 5]: median 5 (deviation 3) beats mean 4 (deviation 4).
    assert!((summary.adjustment - 5.0).abs() < 1e-12);
    // Simulated adjustments [2, 4, 6]: mean and median tie at 4.
    assert!((summary.simulated_adjustment - 4.0).abs() < 1e-9);

    assert_eq!(
        out,
        "Shrinkage: 0.8000, Adjustment: 5.0000, Simulated adjustment 4.0000\n"
    );
}

#[test]
fn malformed_lines_are_reported_and_skipped() {
    let (result, out) = run("10 8\nbadline\n20 abc\n30 25\n");
    result.unwrap();

    assert_eq!(
        out,
        "Invalid line: badline\n\
         Error parsing actual value: abc\n\
         Shrinkage: 0.8167, Adjustment: 3.5000, Simulated adjustment 3.6667\n"
    );

    // Same numbers as if the bad lines were never there.
    let (_, clean) = run("10 8\n30 25\n");
    assert_eq!(out.lines().last(), clean.lines().last());
}

#[test]
fn invalid_utf8_line_is_reported_and_run_completes() {
    let mut out = Vec::new();
    let summary = pipeline::run_reader(
        &b"10 8\n\xff 1\n30 25\n"[..],
        &ShrinkageConfig::default(),
        &mut out,
    )
    .unwrap();
    assert!((summary.adjustment - 3.5).abs() < 1e-12);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error parsing expected value: \u{FFFD}\n\
         Shrinkage: 0.8167, Adjustment: 3.5000, Simulated adjustment 3.6667\n"
    );
}

/// Serves one malformed and one good line, then fails.
struct BrokenStream {
    served: bool,
}

impl Read for BrokenStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "connection reset"));
        }
        self.served = true;
        let lines = b"badline\n10 8\n";
        buf[..lines.len()].copy_from_slice(lines);
        Ok(lines.len())
    }
}

#[test]
fn read_failure_still_prints_earlier_diagnostics() {
    let mut out = Vec::new();
    let err = pipeline::run_reader(
        io::BufReader::new(BrokenStream { served: false }),
        &ShrinkageConfig::default(),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Load(LoadError::Read { line_number: 3, .. })
    ));
    assert_eq!(String::from_utf8(out).unwrap(), "Invalid line: badline\n");
}

#[test]
fn empty_input_is_empty_dataset_error() {
    let (result, out) = run("");
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Estimate {
            stage: STAGE_SHRINKAGE,
            source: EstimateError::Empty,
        }
    ));
    assert!(out.is_empty());
}

#[test]
fn all_lines_invalid_reports_then_fails() {
    let (result, out) = run("a b\nnope\n");
    assert!(result.is_err());
    assert_eq!(
        out,
        "Error parsing expected value: a\nInvalid line: nope\n"
    );
}

#[test]
fn run_file_reads_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("measurements.txt");
    std::fs::write(&path, "10 8\n20 15\n30 25\n").unwrap();

    let mut out = Vec::new();
    let summary = pipeline::run_file(&path, &ShrinkageConfig::default(), &mut out).unwrap();
    assert!((summary.adjustment - 5.0).abs() < 1e-12);
    assert!(String::from_utf8(out).unwrap().starts_with("Shrinkage: 0.8000"));
}

#[test]
fn run_file_on_empty_file_is_empty_dataset_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    let mut out = Vec::new();
    let err = pipeline::run_file(&path, &ShrinkageConfig::default(), &mut out).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Estimate {
            source: EstimateError::Empty,
            ..
        }
    ));
}

#[test]
fn run_file_missing_is_fatal_open_error() {
    let mut out = Vec::new();
    let err = pipeline::run_file(
        Path::new("/definitely/not/here.txt"),
        &ShrinkageConfig::default(),
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Load(LoadError::Open { .. })));
    assert!(out.is_empty());
}

#[test]
fn invalid_config_is_rejected_before_loading() {
    let mut config = ShrinkageConfig::default();
    config.report.precision = Some(99);

    let mut out = Vec::new();
    let err = pipeline::run_reader("10 8\n".as_bytes(), &config, &mut out).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}

#[test]
fn configured_precision_applies_to_output() {
    let config = ShrinkageConfig::from_toml("[report]\nprecision = 2\n").unwrap();
    let mut out = Vec::new();
    pipeline::run_reader("10 8\n20 15\n30 25\n".as_bytes(), &config, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Shrinkage: 0.80, Adjustment: 5.00, Simulated adjustment 4.00\n"
    );
}
