//! The rectangular table model.
//!
//! # Invariants
//!
//! 1. **Rectangular**: every row holds exactly [`Table::column_count`] cells.
//!
//! 2. **No blank columns**: every column has at least one cell with
//!    non-whitespace text. Columns that are blank in every row are removed,
//!    never padded.
//!
//! 3. **Empty is empty**: a table without columns has no rows either, so
//!    [`Table::is_empty`] covers both degenerate shapes.
//!
//! Cells are plain strings; a multi-line cell carries its lines joined with
//! `\n`. The first row is the header.

/// A rectangular grid of cells, first row as header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
    columns: usize,
}

impl Table {
    /// Build a table from possibly ragged rows.
    ///
    /// Rows are padded on the right with empty cells to the longest row's
    /// length, then every column blank in all rows is dropped and the
    /// remaining columns shift left.
    ///
    /// ```
    /// use gridfmt_table::Table;
    ///
    /// let table = Table::from_rows([vec!["", "a", "b"], vec!["", "c"]]);
    /// assert_eq!(table.column_count(), 2);
    /// assert_eq!(table.cell(1, 1), Some(""));
    /// ```
    #[must_use]
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        unify(rows)
    }

    /// All rows, header first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row, if the table has any rows.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    #[must_use]
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of rows, header included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns shared by every row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Whether the table has no rows (and therefore no columns).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at `(row, column)`.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Iterate over the cells of one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column).map(String::as_str))
    }

    /// Consume the table, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Pad ragged rows and drop all-blank columns.
fn unify(rows: Vec<Vec<String>>) -> Table {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let keep: Vec<bool> = (0..width)
        .map(|column| {
            rows.iter()
                .any(|row| row.get(column).is_some_and(|cell| !is_blank(cell)))
        })
        .collect();

    let columns = keep.iter().filter(|&&kept| kept).count();
    if columns == 0 {
        return Table::default();
    }

    let rows = rows
        .into_iter()
        .map(|mut row| {
            row.resize(width, String::new());
            row.into_iter()
                .zip(&keep)
                .filter_map(|(cell, &kept)| kept.then_some(cell))
                .collect()
        })
        .collect();

    Table { rows, columns }
}
