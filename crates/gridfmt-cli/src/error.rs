//! Errors surfaced by the `gridfmt` binary.

use std::fmt;
use std::io;
use std::path::PathBuf;

use gridfmt_table::TableError;

use crate::cli::ParseError;

/// Anything that stops a `gridfmt` run.
#[derive(Debug)]
pub enum CliError {
    /// Bad arguments, or a `--line` outside any table.
    Usage(String),
    /// The encoding label is not a WHATWG label.
    UnknownEncoding(String),
    /// Reading the input or writing the output failed.
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
    /// The table engine refused the region.
    Table(TableError),
}

impl CliError {
    /// Wrap an I/O failure on `path` (None = a standard stream).
    pub fn io(path: Option<PathBuf>, source: io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::UnknownEncoding(_) | Self::Table(_) => 1,
            Self::Io { .. } => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(message) => f.write_str(message),
            Self::UnknownEncoding(label) => write!(f, "unknown encoding label: {label}"),
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "{}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "I/O error: {source}"),
            Self::Table(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Table(err) => Some(err),
            Self::Usage(_) | Self::UnknownEncoding(_) => None,
        }
    }
}

impl From<TableError> for CliError {
    fn from(err: TableError) -> Self {
        Self::Table(err)
    }
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        Self::Usage(err.to_string())
    }
}
