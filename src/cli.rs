//! Command-line interface for the benchmark
//!
//! ```text
//! sortbench <ALGORITHM> <SIZE> [--seed N] [--json]
//! sortbench --suite [--seed N] [--json]
//! ```
//!
//! Errors are returned up to [`run_with_args`], which prints one line and
//! maps them to an exit code. A sort that fails verification is a reported
//! result, not an error, and still exits with 0.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::config::{reference_configs, TestConfig, DEFAULT_SEED, MAX_CAPACITY};
use crate::error::{Error, Result};
use crate::harness::{run_suite, run_test, TestOutcome};
use crate::report;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
/// Results could not be serialized or written
pub const EXIT_OUTPUT: i32 = 2;

/// Benchmark and verify quicksort and radix sort
#[derive(Parser, Debug)]
#[command(name = "sortbench", version, about, long_about = None)]
pub struct Cli {
    /// Algorithm to run: quicksort or radix
    #[arg(value_name = "ALGORITHM", required_unless_present = "suite")]
    pub algorithm: Option<String>,

    /// Number of elements to sort (1..=4096)
    #[arg(value_name = "SIZE", required_unless_present = "suite", allow_negative_numbers = true)]
    pub size: Option<String>,

    /// Seed for input generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Print results as a single JSON document
    #[arg(long)]
    pub json: bool,

    /// Run both algorithms at every reference size and cross-check them
    #[arg(long, conflicts_with_all = ["algorithm", "size"])]
    pub suite: bool,
}

pub fn usage_line() -> String {
    format!(
        "Usage: sortbench <algorithm> <size>  (algorithms: quicksort, radix; max size {MAX_CAPACITY})"
    )
}

/// Parse `args` (program name first), run, and write results to `out`.
///
/// Returns the process exit code.
pub fn run_with_args<I, T, W>(args: I, out: &mut W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{e}");
                    EXIT_SUCCESS
                }
                _ => {
                    debug!(error = %e, "argument parsing failed");
                    let _ = writeln!(out, "{}", usage_line());
                    EXIT_USAGE
                }
            };
        }
    };

    let result = execute(&cli, out);
    exit_code(result, out)
}

fn exit_code<W: Write>(result: Result<()>, out: &mut W) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(Error::Config(e)) => {
            let _ = writeln!(out, "{e}");
            EXIT_USAGE
        }
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_OUTPUT
        }
    }
}

/// Entry point for the binary: reads `std::env::args_os` and prints to stdout.
pub fn run() -> i32 {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = run_with_args(std::env::args_os(), &mut out);
    let _ = out.flush();
    code
}

fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.suite {
        let report = run_suite(&reference_configs(), cli.seed);
        if cli.json {
            writeln!(out, "{}", report::suite_json(&report)?)?;
        } else {
            write!(out, "{}", report::render_suite(&report))?;
        }
        return Ok(());
    }

    let config = TestConfig::parse(
        cli.algorithm.as_deref().unwrap_or_default(),
        cli.size.as_deref().unwrap_or_default(),
    )?;

    if cli.json {
        let outcome = run_test(&config, cli.seed);
        writeln!(out, "{}", report::outcome_json(&outcome)?)?;
        return Ok(());
    }

    writeln!(out, "{}", report::config_header(&config))?;
    let outcome = run_test(&config, cli.seed);
    write_result(&outcome, out)
}

/// The result line is written whether or not the output verified.
fn write_result<W: Write>(outcome: &TestOutcome, out: &mut W) -> Result<()> {
    writeln!(out, "{}", report::result_line(outcome))?;
    Ok(())
}
