//! Measurement loading from `"<expected> <actual>"` text lines.
//!
//! Malformed lines are collected as non-fatal errors and skipped.
//! Failing to open or read the input aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use shrinkage_core::config::LoaderConfig;
use shrinkage_core::constants::FIELD_SEPARATOR;
use shrinkage_core::errors::{LoadError, LoadResult};
use shrinkage_core::Measurement;

/// Open `path` and load every well-formed line.
/// The file handle is dropped before returning, on success or error.
pub fn load_file(
    path: &Path,
    config: &LoaderConfig,
) -> Result<LoadResult<Vec<Measurement>>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file), config)
}

/// Load measurements from any buffered reader, preserving input order.
///
/// Lines are split on `\n` as raw bytes; a trailing `\r` is dropped and
/// bytes that are not UTF-8 are replaced before parsing, so such a line is
/// skipped like any other malformed line. Only a failing reader is fatal,
/// and that error carries the lines skipped so far.
pub fn load_reader<R: BufRead>(
    reader: R,
    config: &LoaderConfig,
) -> Result<LoadResult<Vec<Measurement>>, LoadError> {
    let mut result = LoadResult::new(Vec::new());

    for (index, raw) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let raw = match raw {
            Ok(raw) => raw,
            Err(source) => {
                return Err(LoadError::Read {
                    line_number,
                    source,
                    skipped: result.errors,
                })
            }
        };
        let bytes = raw.strip_suffix(b"\r").unwrap_or(raw.as_slice());
        let line = String::from_utf8_lossy(bytes);

        match parse_line(&line, line_number, config) {
            Ok(measurement) => result.data.push(measurement),
            Err(err) => {
                tracing::warn!(line_number, error = %err, "skipping line");
                result.add_error(err);
            }
        }
    }

    tracing::debug!(
        measurements_loaded = result.data.len(),
        lines_skipped = result.error_count(),
        "measurements loaded"
    );
    Ok(result)
}

/// Parse one line into a measurement.
///
/// The line must split on single spaces into exactly two tokens, each a
/// finite decimal number. Consecutive spaces produce empty tokens and
/// therefore an invalid line.
pub fn parse_line(
    line: &str,
    line_number: usize,
    config: &LoaderConfig,
) -> Result<Measurement, LoadError> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [expected, actual] = parts.as_slice() else {
        return Err(LoadError::InvalidLine {
            line_number,
            line: line.to_string(),
        });
    };

    let expected = parse_value(expected).ok_or_else(|| LoadError::InvalidExpected {
        line_number,
        token: expected.to_string(),
    })?;
    let actual = parse_value(actual).ok_or_else(|| LoadError::InvalidActual {
        line_number,
        token: actual.to_string(),
    })?;

    if expected == 0.0 && config.effective_skip_zero_expected() {
        return Err(LoadError::ZeroExpected {
            line_number,
            line: line.to_string(),
        });
    }

    Ok(Measurement::new(expected, actual))
}

fn parse_value(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
