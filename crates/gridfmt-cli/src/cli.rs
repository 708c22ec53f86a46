//! Command-line argument parsing.
//!
//! Parses args manually to keep the binary lean. Environment variables with
//! the `GRIDFMT_` prefix provide defaults that explicit flags override.

use std::fmt;
use std::path::PathBuf;

use gridfmt_core::logging::DEFAULT_FILTER;

/// Crate version, printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encoding used when neither `--encoding` nor `GRIDFMT_ENCODING` is set.
pub const DEFAULT_ENCODING: &str = "utf-8";

pub const HELP_TEXT: &str = "\
gridfmt - reformat plain-text tables as bordered grids

USAGE:
    gridfmt [OPTIONS] [FILE]

Reads FILE (or stdin when FILE is missing or '-') and writes the document
to stdout with the selected table reformatted.

OPTIONS:
    --reflow             Wrap cells to the widths of the table's existing top
                         border instead of sizing columns to their content
    --line=N             Format the table around line N, 1-indexed
                         (default: the whole input is one table)
    --encoding=LABEL     Input/output encoding, any WHATWG label such as
                         'utf-8', 'shift_jis' or 'windows-1252' (default: utf-8)
    --log=FILTER         Log filter for stderr diagnostics (default: warn)
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    GRIDFMT_ENCODING     Override the default --encoding
    GRIDFMT_LOG          Override the default --log filter
    GRIDFMT_REFLOW       Enable --reflow (1/true)

EXIT STATUS:
    0  success
    1  usage error, unknown encoding, or no border to reflow against
    2  input/output error";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Reflow against the existing border widths.
    pub reflow: bool,
    /// 1-based line inside the table to format (None = whole input).
    pub line: Option<usize>,
    /// WHATWG encoding label.
    pub encoding: String,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
    /// Input file (None = stdin).
    pub input: Option<PathBuf>,
}

/// Why argument parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("help requested"),
            Self::Version => f.write_str("version requested"),
            Self::InvalidValue { flag, value } => write!(f, "invalid {flag} value: {value}"),
            Self::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Default for Opts {
    fn default() -> Self {
        Self {
            reflow: false,
            line: None,
            encoding: DEFAULT_ENCODING.into(),
            log_filter: DEFAULT_FILTER.into(),
            input: None,
        }
    }
}

fn is_enabled(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl Opts {
    /// Parse arguments (without the program name) on top of environment
    /// defaults read through `get_env`.
    ///
    /// # Errors
    ///
    /// [`ParseError::Help`] and [`ParseError::Version`] report that the
    /// caller should print and exit; the other variants are usage errors.
    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = get_env("GRIDFMT_ENCODING")
            && !val.trim().is_empty()
        {
            opts.encoding = val.trim().to_string();
        }
        if let Some(val) = get_env("GRIDFMT_LOG")
            && !val.trim().is_empty()
        {
            opts.log_filter = val;
        }
        if let Some(val) = get_env("GRIDFMT_REFLOW") {
            opts.reflow = is_enabled(&val);
        }

        // Parse command-line args (override env vars)
        let mut saw_input = false;
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--reflow" => opts.reflow = true,
                "-" if !saw_input => saw_input = true,
                other => {
                    if let Some(val) = other.strip_prefix("--line=") {
                        match val.parse::<usize>() {
                            Ok(n) if n >= 1 => opts.line = Some(n),
                            _ => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--line",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--encoding=") {
                        if val.trim().is_empty() {
                            return Err(ParseError::InvalidValue {
                                flag: "--encoding",
                                value: val.to_string(),
                            });
                        }
                        opts.encoding = val.trim().to_string();
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log_filter = val.to_string();
                    } else if other.starts_with('-') || saw_input {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    } else {
                        saw_input = true;
                        opts.input = Some(PathBuf::from(other));
                    }
                }
            }
        }

        Ok(opts)
    }
}
