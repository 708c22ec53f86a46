//! Property-based invariant tests for the gridfmt-table parser and renderer.
//!
//! These tests verify structural invariants that must hold for **any** input
//! block, however ragged or half-edited:
//!
//! 1. Parsed tables are rectangular.
//! 2. Parsed tables never contain a column that is blank in every row.
//! 3. Every rendered line has the same display width, 1 + sum(w + 3).
//! 4. Rendering is a fixed point: parsing rendered output gives the table back.
//! 5. Formatting is idempotent on arbitrary input.
//! 6. Reflow keeps the target widths when every word fits.
//! 7. The border of a reflowed table reads back as its target widths.
//! 8. Reflowed cell lines stay within their target unless they hold one token.

use gridfmt_core::text_width::display_width;
use gridfmt_table::render::{BorderKind, border_line};
use gridfmt_table::{Table, parse, read_border_widths, render};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Loosely table-shaped lines: words, runs of spaces, pipes and border
/// drawings, in any mix.
fn raw_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,5}( {1,3}[a-z]{1,5}){0,3}",
        " {0,4}\\| ?[a-z ]{0,6}( \\| ?[a-z ]{0,6}){0,3} ?\\|?",
        "[-+= ]{1,12}",
    ]
}

fn raw_block_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(raw_line_strategy(), 0..10)
}

/// Cell text the renderer can round-trip: words joined by single spaces,
/// CJK runs, or nothing.
fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,5}( [a-z]{1,5}){0,2}",
        "[\u{4E00}-\u{4E20}]{1,3}",
        Just(String::new()),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..=4, 1usize..=5).prop_flat_map(|(columns, rows)| {
        proptest::collection::vec(proptest::collection::vec(cell_strategy(), columns), rows)
            .prop_map(Table::from_rows)
    })
}

fn short_word_table_strategy() -> impl Strategy<Value = Table> {
    (1usize..=4, 1usize..=5).prop_flat_map(|(columns, rows)| {
        proptest::collection::vec(
            proptest::collection::vec("[a-z]{1,3}( [a-z]{1,3}){0,3}", columns),
            rows,
        )
        .prop_map(Table::from_rows)
    })
}

fn expected_line_width(widths: &[usize]) -> usize {
    1 + widths.iter().map(|w| w + 3).sum::<usize>()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Rectangular, no blank columns
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parsed_tables_are_rectangular(lines in raw_block_strategy()) {
        let table = parse(&lines);
        for row in table.rows() {
            prop_assert_eq!(row.len(), table.column_count());
        }
        if table.column_count() == 0 {
            prop_assert_eq!(table.row_count(), 0);
        }
    }

    #[test]
    fn parsed_tables_have_no_blank_columns(lines in raw_block_strategy()) {
        let table = parse(&lines);
        for column in 0..table.column_count() {
            prop_assert!(
                table.column(column).any(|cell| !cell.trim().is_empty()),
                "column {} is blank in every row of {:?}",
                column,
                table
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Equal line widths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendered_lines_share_one_width(lines in raw_block_strategy()) {
        let table = parse(&lines);
        let rendered = render(&table, None);
        let widths = read_border_widths(&rendered).unwrap_or_default();
        for line in &rendered {
            prop_assert_eq!(display_width(line), expected_line_width(&widths), "{}", line);
        }
    }

    #[test]
    fn reflowed_lines_share_one_width(
        table in table_strategy(),
        targets in proptest::collection::vec(0usize..=8, 0..6),
    ) {
        let rendered = render(&table, Some(&targets));
        if let Some(first) = rendered.first() {
            let width = display_width(first);
            for line in &rendered {
                prop_assert_eq!(display_width(line), width, "{}", line);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Fixed point and idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendering_is_a_fixed_point(table in table_strategy()) {
        let rendered = render(&table, None);
        prop_assert_eq!(parse(&rendered), table);
    }

    #[test]
    fn formatting_is_idempotent(lines in raw_block_strategy()) {
        let once = render(&parse(&lines), None);
        let twice = render(&parse(&once), None);
        prop_assert_eq!(twice, once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–8. Reflow width fidelity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reflow_keeps_targets_when_words_fit(
        table in short_word_table_strategy(),
        targets in proptest::collection::vec(3usize..=10, 4),
    ) {
        let widths = &targets[..table.column_count()];
        let rendered = render(&table, Some(&targets));
        if !rendered.is_empty() {
            prop_assert_eq!(&rendered[0], &border_line(widths, BorderKind::Body));
            prop_assert_eq!(read_border_widths(&rendered).ok(), Some(widths.to_vec()));
        }
    }

    #[test]
    fn reflowed_cells_respect_targets(
        table in table_strategy(),
        targets in proptest::collection::vec(1usize..=8, 4),
    ) {
        let rendered = render(&table, Some(&targets));
        let reparsed = parse(&rendered);
        for (column, &target) in targets.iter().enumerate().take(reparsed.column_count()) {
            for cell in reparsed.column(column) {
                for line in cell.split('\n') {
                    prop_assert!(
                        display_width(line) <= target || !line.trim().contains(' '),
                        "line {:?} exceeds target {}",
                        line,
                        target
                    );
                }
            }
        }
    }
}
