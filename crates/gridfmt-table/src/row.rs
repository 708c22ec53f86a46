//! Splitting one raw line into cells.
//!
//! Two dialects are recognized, chosen per line:
//!
//! | Dialect      | Trigger            | Delimiter                        |
//! |--------------|--------------------|----------------------------------|
//! | `Pipe`       | line contains `\|` | `\|` plus surrounding whitespace |
//! | `Whitespace` | otherwise          | two or more whitespace chars     |

/// Cell delimiting syntax of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Grid-table rows: `| a | b |`.
    Pipe,
    /// Simple-table rows: columns separated by runs of two or more
    /// whitespace characters.
    Whitespace,
}

impl Dialect {
    /// Pick the dialect of `line`.
    #[must_use]
    pub fn detect(line: &str) -> Self {
        if line.contains('|') {
            Self::Pipe
        } else {
            Self::Whitespace
        }
    }
}

/// Split one line into cell strings.
///
/// ```
/// use gridfmt_table::row::split_row;
///
/// assert_eq!(split_row("| a | b |"), vec!["a", "b"]);
/// assert_eq!(split_row("Name  Age"), vec!["Name", "Age"]);
/// ```
#[must_use]
pub fn split_row(line: &str) -> Vec<String> {
    match Dialect::detect(line) {
        Dialect::Pipe => split_pipe_row(line),
        Dialect::Whitespace => split_whitespace_row(line),
    }
}

/// Drop one leading and one trailing pipe (with the whitespace outside
/// them), then split on the inner pipes.
fn split_pipe_row(line: &str) -> Vec<String> {
    let mut inner = line;
    if let Some(rest) = inner.trim_start().strip_prefix('|') {
        inner = rest;
    }
    if let Some(rest) = inner.trim_end().strip_suffix('|') {
        inner = rest;
    }
    inner
        .trim()
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Split on runs of two or more whitespace characters.
///
/// Trailing whitespace is removed first; leading whitespace is kept, so a
/// line indented by two or more columns starts with an empty cell.
fn split_whitespace_row(line: &str) -> Vec<String> {
    let line = line.trim_end();
    let mut cells = Vec::new();
    let mut cell_start = 0;
    let mut run_start = None;
    let mut run_len = 0;

    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(idx);
            }
            run_len += 1;
            continue;
        }
        if let Some(start) = run_start.take() {
            if run_len >= 2 {
                cells.push(line[cell_start..start].to_string());
                cell_start = idx;
            }
        }
        run_len = 0;
    }
    cells.push(line[cell_start..].to_string());
    cells
}
