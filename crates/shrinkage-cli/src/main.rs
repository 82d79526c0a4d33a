//! `shrinkage <file>`: estimate shrinkage and adjustment from a
//! measurement file and print them on one line.

use std::error::Error;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use shrinkage_analysis::{pipeline, Summary};
use shrinkage_core::errors::{PipelineError, ShrinkageErrorCode};
use shrinkage_core::ShrinkageConfig;

const USAGE_EXIT: u8 = 1;
const FAILURE_EXIT: u8 = 2;

fn main() -> ExitCode {
    shrinkage_core::tracing::init_tracing();

    let args: Vec<OsString> = std::env::args_os().collect();
    let Some(path) = input_path(&args) else {
        println!("{}", usage(&args));
        return ExitCode::from(USAGE_EXIT);
    };

    let config = ShrinkageConfig::default();
    let mut stdout = io::stdout().lock();
    let result = flush_output(pipeline::run_file(&path, &config, &mut stdout), &mut stdout);

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.error_code(), error = %err, "run failed");
            eprintln!("{}", err.coded_string());
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(FAILURE_EXIT)
        }
    }
}

/// Flush `out` after a successful run; a failed flush fails the run.
fn flush_output<W: Write>(
    result: Result<Summary, PipelineError>,
    out: &mut W,
) -> Result<Summary, PipelineError> {
    let summary = result?;
    out.flush().map_err(PipelineError::Output)?;
    Ok(summary)
}

/// The single positional argument, or `None` for any other arity.
fn input_path(args: &[OsString]) -> Option<PathBuf> {
    match args {
        [_, path] => Some(PathBuf::from(path)),
        _ => None,
    }
}

fn usage(args: &[OsString]) -> String {
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "shrinkage".to_string());
    format!("Usage: {program} <file>")
}
