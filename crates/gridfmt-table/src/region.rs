//! Host-side helpers: locating a table in a buffer and formatting it in place.
//!
//! The parser and renderer never decide which lines form a table. An editor
//! (or the `gridfmt` binary) picks the region with [`table_bounds`], hands
//! the lines to [`format_region`] or [`reflow_region`], and splices the
//! result back. The indentation of the region's first line is carried over
//! to every output line.

use std::ops::Range;

use crate::border::read_border_widths;
use crate::error::TableError;
use crate::parse::parse;
use crate::render::render;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// The block of non-blank lines around `cursor` (0-based).
///
/// Scans up and down from the cursor line to the nearest blank line or the
/// buffer edge. Returns `None` if the cursor is out of range or on a blank
/// line.
///
/// ```
/// use gridfmt_table::region::table_bounds;
///
/// let buffer = ["intro", "", "a  b", "c  d", "", "outro"];
/// assert_eq!(table_bounds(&buffer, 3), Some(2..4));
/// ```
#[must_use]
pub fn table_bounds<S: AsRef<str>>(lines: &[S], cursor: usize) -> Option<Range<usize>> {
    if is_blank(lines.get(cursor)?.as_ref()) {
        return None;
    }
    let start = lines[..cursor]
        .iter()
        .rposition(|line| is_blank(line.as_ref()))
        .map_or(0, |blank| blank + 1);
    let end = lines[cursor..]
        .iter()
        .position(|line| is_blank(line.as_ref()))
        .map_or(lines.len(), |blank| cursor + blank);
    Some(start..end)
}

/// Leading whitespace of `line`.
#[must_use]
pub fn leading_indent(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Prefix every line with `indent`.
#[must_use]
pub fn apply_indent<S: AsRef<str>>(lines: &[S], indent: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("{indent}{}", line.as_ref()))
        .collect()
}

fn region_indent<S: AsRef<str>>(lines: &[S]) -> &str {
    lines.first().map_or("", |line| leading_indent(line.as_ref()))
}

/// Parse and re-render a table region, sizing columns to their content.
///
/// ```
/// use gridfmt_table::region::format_region;
///
/// let out = format_region(&["  a  b"]);
/// assert_eq!(out, vec!["  +---+---+", "  | a | b |", "  +===+===+"]);
/// ```
#[must_use]
pub fn format_region<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let indent = region_indent(lines);
    let table = parse(lines);
    apply_indent(&render(&table, None), indent)
}

/// Parse and re-render a table region against its existing border widths.
///
/// # Errors
///
/// Returns [`TableError::NoBorderFound`] if the region has no border line;
/// reflow never falls back to content-sized columns.
pub fn reflow_region<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>, TableError> {
    let indent = region_indent(lines);
    let widths = read_border_widths(lines)?;
    let table = parse(lines);
    Ok(apply_indent(&render(&table, Some(&widths)), indent))
}
