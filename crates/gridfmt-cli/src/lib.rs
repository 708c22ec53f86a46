#![forbid(unsafe_code)]

//! gridfmt command-line front end.
//!
//! # Role in gridfmt
//! `gridfmt-cli` is the host the table engine expects: it picks the line
//! region, owns the text encoding, and splices the formatted table back into
//! the surrounding document. The `gridfmt` binary is a thin wrapper around
//! [`app::run`]; the library half exists so integration tests can drive the
//! whole pipeline on byte buffers.

pub mod app;
pub mod cli;
pub mod encoding;
pub mod error;

pub use app::run;
pub use cli::Opts;
pub use error::CliError;
