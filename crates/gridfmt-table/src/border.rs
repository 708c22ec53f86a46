//! Column widths from an existing border line.
//!
//! Reflow keeps a table's width contract: the first drawn separator in the
//! input (normally the top border) says how wide each column is. Segments
//! between `+` junctions include one space of padding on either side of the
//! cell text, so a `+-------+` segment means a five-column cell.

use gridfmt_core::text_width::display_width;

use crate::error::TableError;
use crate::parse::is_separator_line;

/// Border corner and junction character.
pub const JUNCTION: char = '+';

/// Read target column widths from the first border line in `lines`.
///
/// Whitespace-only lines classify as separators for row grouping but carry
/// no drawing, so they are skipped here.
///
/// # Errors
///
/// Returns [`TableError::NoBorderFound`] when no line is a drawn separator.
///
/// ```
/// use gridfmt_table::read_border_widths;
///
/// let widths = read_border_widths(&["+-------+-----+", "| Alice | 30  |"]).unwrap();
/// assert_eq!(widths, vec![5, 3]);
/// ```
pub fn read_border_widths<S: AsRef<str>>(lines: &[S]) -> Result<Vec<usize>, TableError> {
    let border = lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_separator_line(line))
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or(TableError::NoBorderFound)?;

    let mut drawing = border;
    if let Some(rest) = drawing.strip_prefix(JUNCTION) {
        drawing = rest;
    }
    if let Some(rest) = drawing.strip_suffix(JUNCTION) {
        drawing = rest;
    }

    let widths: Vec<usize> = drawing
        .split(JUNCTION)
        .map(|segment| display_width(segment).saturating_sub(2))
        .collect();

    #[cfg(feature = "tracing")]
    gridfmt_core::debug!(
        target: gridfmt_core::logging::LOG_TARGET,
        border,
        ?widths,
        "border widths read"
    );

    Ok(widths)
}
