//! Errors from table operations.
//!
//! Malformed table text is never an error: parsing always produces some
//! rectangular table. The only failure is a reflow request against input
//! that carries no border to take widths from.

/// Errors from table operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Reflow was requested but the input has no separator line to read
    /// column widths from.
    NoBorderFound,
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoBorderFound => {
                write!(f, "cannot reflow this table: top table border not found")
            }
        }
    }
}

impl std::error::Error for TableError {}
