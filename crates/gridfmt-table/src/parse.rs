//! Raw lines to [`Table`].
//!
//! Parsing is best-effort and never fails: table text is frequently
//! mid-edit, so ragged rows, missing delimiters and stray characters all
//! degrade to *some* rectangular table.
//!
//! 1. Lines made only of border characters are separators.
//! 2. Without separators every line is its own row. With separators, the
//!    content lines between two separators form one logical row; this is
//!    how multi-line cells are recognized.
//! 3. Each physical line is split into cells and the lines of a row are
//!    merged column by column.
//! 4. The rows are unified into a rectangle (see [`Table::from_rows`]).

use crate::row::split_row;
use crate::table::Table;

/// Whether `line` is a border drawing: non-empty and made only of `+`, `-`,
/// `=`, spaces and tabs.
#[must_use]
pub fn is_separator_line(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|ch| matches!(ch, '+' | '-' | '=' | ' ' | '\t'))
}

/// Parse a block of raw lines into a table.
///
/// ```
/// use gridfmt_table::parse;
///
/// let table = parse(&["Name  Age", "Alice  30", "Bob    7"]);
/// assert_eq!(table.rows(), &[["Name", "Age"], ["Alice", "30"], ["Bob", "7"]]);
/// ```
#[must_use]
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Table {
    #[cfg(feature = "tracing")]
    let _span = gridfmt_core::debug_span!(
        target: gridfmt_core::logging::LOG_TARGET,
        "table_parse",
        lines = lines.len()
    )
    .entered();

    let rows: Vec<Vec<String>> = partition(lines)
        .into_iter()
        .map(|group| merge_lines(&group))
        .collect();
    let table = Table::from_rows(rows);

    #[cfg(feature = "tracing")]
    gridfmt_core::debug!(
        target: gridfmt_core::logging::LOG_TARGET,
        rows = table.row_count(),
        columns = table.column_count(),
        "table parsed"
    );

    table
}

/// Group content lines into logical rows.
///
/// Without any separator line each line is a group of its own. Otherwise
/// separators delimit groups and empty groups (typically before the top
/// border and after the bottom one) are dropped.
fn partition<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
    if !lines.iter().any(|line| is_separator_line(line)) {
        return lines.into_iter().map(|line| vec![line]).collect();
    }

    lines
        .split(|line| is_separator_line(line))
        .filter(|group| !group.is_empty())
        .map(<[&str]>::to_vec)
        .collect()
}

/// Merge the physical lines of one logical row.
///
/// Cell `i` of the result joins, with `\n`, the trimmed non-blank text of
/// cell `i` from every line. Lines with fewer cells contribute nothing to
/// the missing columns.
fn merge_lines(group: &[&str]) -> Vec<String> {
    let mut columns: Vec<Vec<String>> = Vec::new();
    for line in group {
        let cells = split_row(line);
        if columns.len() < cells.len() {
            columns.resize_with(cells.len(), Vec::new);
        }
        for (column, cell) in columns.iter_mut().zip(cells) {
            let text = cell.trim();
            if !text.is_empty() {
                column.push(text.to_string());
            }
        }
    }
    columns.into_iter().map(|parts| parts.join("\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_classification() {
        assert!(is_separator_line("+-----+---+"));
        assert!(is_separator_line("+=====+===+"));
        assert!(is_separator_line("  ====  ===="));
        assert!(is_separator_line("\t---"));
        assert!(!is_separator_line(""));
        assert!(!is_separator_line("| a | b |"));
        assert!(!is_separator_line("+--x--+"));
    }

    #[test]
    fn whitespace_table_one_row_per_line() {
        let table = parse(&["Name  Age", "Alice  30", "Bob    7"]);
        assert_eq!(
            table.rows(),
            &[["Name", "Age"], ["Alice", "30"], ["Bob", "7"]]
        );
    }

    #[test]
    fn grid_table_multi_line_cells() {
        let lines = [
            "+-------+-----+",
            "| Name  | Age |",
            "+=======+=====+",
            "| Alice | 30  |",
            "| Smith |     |",
            "+-------+-----+",
            "| Bob   | 7   |",
            "+-------+-----+",
        ];
        let table = parse(&lines);
        assert_eq!(
            table.rows(),
            &[["Name", "Age"], ["Alice\nSmith", "30"], ["Bob", "7"]]
        );
    }

    #[test]
    fn separators_group_whitespace_lines() {
        let lines = ["=====  =====", "Name   Age", "=====  =====", "Alice  30", "Bob    7"];
        let table = parse(&lines);
        assert_eq!(table.rows(), &[["Name", "Age"], ["Alice\nBob", "30\n7"]]);
    }

    #[test]
    fn short_lines_contribute_nothing() {
        let lines = ["+---+", "| a | b | c |", "| d |", "+---+"];
        let table = parse(&lines);
        assert_eq!(table.rows(), &[["a\nd", "b", "c"]]);
    }

    #[test]
    fn indented_whitespace_table_drops_leading_column() {
        let table = parse(&["    Name  Age", "    Bob   7"]);
        assert_eq!(table.rows(), &[["Name", "Age"], ["Bob", "7"]]);
    }

    #[test]
    fn indented_grid_table() {
        let lines = ["  +---+---+", "  | a | b |", "  +---+---+"];
        let table = parse(&lines);
        assert_eq!(table.rows(), &[["a", "b"]]);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let table = parse(&["a  b  c", "d"]);
        assert_eq!(table.rows(), &[["a", "b", "c"], ["d", "", ""]]);
    }

    #[test]
    fn empty_column_is_removed() {
        let table = parse(&["| a |   | c |", "| d |   | f |"]);
        assert_eq!(table.rows(), &[["a", "c"], ["d", "f"]]);
    }

    #[test]
    fn mixed_dialects_per_line() {
        let table = parse(&["a | b", "c  d"]);
        assert_eq!(table.rows(), &[["a", "b"], ["c", "d"]]);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(parse::<&str>(&[]).is_empty());
        assert!(parse(&["+----+", "+----+"]).is_empty());
        assert!(parse(&["|   |"]).is_empty());
        let single = parse(&["lonely"]);
        assert_eq!(single.rows(), &[["lonely"]]);
    }

    #[test]
    fn partition_drops_empty_groups() {
        let lines = ["+--+", "a", "+--+", "+--+", "b", "c", "+--+"];
        let groups = partition(&lines);
        assert_eq!(groups, vec![vec!["a"], vec!["b", "c"]]);
    }
}
