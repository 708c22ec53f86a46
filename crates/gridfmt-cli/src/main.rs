#![forbid(unsafe_code)]

//! `gridfmt` binary entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use gridfmt_cli::cli::{HELP_TEXT, Opts, ParseError, VERSION};
use gridfmt_cli::error::CliError;
use gridfmt_core::logging::DEFAULT_FILTER;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let opts = match Opts::parse_from_env_and_args(std::env::args().skip(1), |key| {
        std::env::var(key).ok()
    }) {
        Ok(opts) => opts,
        Err(ParseError::Help) => {
            println!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        Err(ParseError::Version) => {
            println!("gridfmt {VERSION}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let err = CliError::from(err);
            eprintln!("gridfmt: {err}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::from(err.exit_code());
        }
    };

    init_logging(&opts.log_filter);

    match execute(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "run failed");
            eprintln!("gridfmt: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("gridfmt: ignoring log filter {filter:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute(opts: &Opts) -> Result<(), CliError> {
    let input = read_input(opts.input.as_deref())?;
    let output = gridfmt_cli::run(opts, &input)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .and_then(|()| stdout.flush())
        .map_err(|err| CliError::io(None, err))
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) => fs::read(path).map_err(|err| CliError::io(Some(path.to_path_buf()), err)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|err| CliError::io(None, err))?;
            Ok(buf)
        }
    }
}
