//! [`Table`] to bordered text lines.
//!
//! Output shape, for column widths `w`:
//!
//! ```text
//! +-------+-----+     each segment is w + 2 wide
//! | Name  | Age |     one space, the text, padding to w + 1
//! +=======+=====+     header separator after the first row
//! | Alice | 30  |
//! +-------+-----+     body separator after every other row
//! ```
//!
//! Padding is computed on display width, so rows holding wide characters
//! line up with the borders. Every emitted line has the same display width.

use std::borrow::Cow;

use gridfmt_core::text_width::{display_width, field_width};
use gridfmt_text::wrap;

use crate::border::JUNCTION;
use crate::table::Table;

/// Cell column separator.
pub const COLUMN_SEPARATOR: char = '|';

/// Which horizontal rule to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderKind {
    /// Top border and separators between body rows (`-`).
    #[default]
    Body,
    /// Separator below the header row (`=`).
    Header,
}

impl BorderKind {
    /// Line-drawing character for this rule.
    #[must_use]
    pub const fn fill(self) -> char {
        match self {
            Self::Body => '-',
            Self::Header => '=',
        }
    }
}

/// Draw a horizontal rule for the given column widths.
///
/// Each column gets `width + 2` fill characters, joined and surrounded by
/// `+`. No columns draw nothing.
///
/// ```
/// use gridfmt_table::render::{border_line, BorderKind};
///
/// assert_eq!(border_line(&[5, 3], BorderKind::Body), "+-------+-----+");
/// assert_eq!(border_line(&[1], BorderKind::Header), "+===+");
/// ```
#[must_use]
pub fn border_line(widths: &[usize], kind: BorderKind) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let fill = kind.fill();
    let mut line = String::from(JUNCTION);
    for &width in widths {
        line.extend(std::iter::repeat_n(fill, width + 2));
        line.push(JUNCTION);
    }
    line
}

/// Natural column widths: the widest field of each column.
#[must_use]
pub fn column_widths(table: &Table) -> Vec<usize> {
    (0..table.column_count())
        .map(|column| table.column(column).map(field_width).max().unwrap_or(0))
        .collect()
}

/// Render a table as bordered lines.
///
/// Without `widths`, columns are sized to their content. With `widths`
/// (reflow), every cell is first re-wrapped to its column's target width;
/// columns beyond the list keep their natural width and targets beyond the
/// table's columns are ignored. A column only grows past its target when it
/// holds a single token wider than the target.
///
/// An empty table renders to no lines.
#[must_use]
pub fn render(table: &Table, widths: Option<&[usize]>) -> Vec<String> {
    if table.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "tracing")]
    let _span = gridfmt_core::debug_span!(
        target: gridfmt_core::logging::LOG_TARGET,
        "table_render",
        rows = table.row_count(),
        columns = table.column_count(),
        reflow = widths.is_some()
    )
    .entered();

    let (rows, widths): (Cow<'_, [Vec<String>]>, Vec<usize>) = match widths {
        None => (Cow::Borrowed(table.rows()), column_widths(table)),
        Some(targets) => {
            let (rows, widths) = reflow(table, targets);
            (Cow::Owned(rows), widths)
        }
    };

    #[cfg(feature = "tracing")]
    gridfmt_core::trace!(
        target: gridfmt_core::logging::LOG_TARGET,
        ?widths,
        "column widths resolved"
    );

    let body_rule = border_line(&widths, BorderKind::Body);
    let header_rule = border_line(&widths, BorderKind::Header);

    let mut output = vec![body_rule.clone()];
    for (index, row) in rows.iter().enumerate() {
        output.extend(row_lines(row, &widths));
        output.push(if index == 0 {
            header_rule.clone()
        } else {
            body_rule.clone()
        });
    }
    output
}

/// Re-wrap every cell to its target width.
///
/// Returns the wrapped rows and the widths to draw them with.
fn reflow(table: &Table, targets: &[usize]) -> (Vec<Vec<String>>, Vec<usize>) {
    let natural = column_widths(table);
    let targets: Vec<usize> = natural
        .iter()
        .enumerate()
        .map(|(column, &width)| targets.get(column).copied().unwrap_or(width))
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(&targets)
                .map(|(cell, &width)| wrap(cell, width).join("\n"))
                .collect()
        })
        .collect();

    let widths = targets
        .iter()
        .enumerate()
        .map(|(column, &target)| {
            rows.iter()
                .map(|row| field_width(&row[column]))
                .fold(target, usize::max)
        })
        .collect();

    (rows, widths)
}

/// Physical lines of one row: as many as its tallest cell.
fn row_lines(row: &[String], widths: &[usize]) -> Vec<String> {
    let cells: Vec<Vec<&str>> = row.iter().map(|cell| cell.split('\n').collect()).collect();
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|index| {
            let mut line = String::from(COLUMN_SEPARATOR);
            for (cell, &width) in cells.iter().zip(widths) {
                let text = cell.get(index).copied().unwrap_or("");
                line.push_str(&pad_field(text, width));
                line.push(COLUMN_SEPARATOR);
            }
            line
        })
        .collect()
}

/// One leading space, the text, then spaces up to `width + 2` columns.
fn pad_field(text: &str, width: usize) -> String {
    let padding = (width + 1).saturating_sub(display_width(text));
    let mut field = String::with_capacity(text.len() + padding + 1);
    field.push(' ');
    field.push_str(text);
    field.extend(std::iter::repeat_n(' ', padding));
    field
}
