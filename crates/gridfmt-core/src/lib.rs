#![forbid(unsafe_code)]

//! Core: the display-width metric and the logging facade.
//!
//! # Role in gridfmt
//! `gridfmt-core` is the leaf of the workspace. Everything that measures text
//! (the row parser, the wrapper, the grid renderer) goes through
//! [`text_width`] so that column widths, wrap budgets and padding all agree
//! on how many terminal columns a string occupies.
//!
//! # How it fits in the system
//! `gridfmt-text` wraps cell text against this metric, and `gridfmt-table`
//! uses it to size and pad columns. With the `tracing` feature enabled the
//! tracing macros are re-exported here so downstream crates log through a
//! single facade.

pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};

pub mod text_width {
    //! Display width of text under the wide-character convention.
    //!
    //! Every character occupies one column, except characters in the East
    //! Asian Wide (W) and Fullwidth (F) classes, which occupy two. Control
    //! characters, combining marks and unassigned code points all count as
    //! one column: a table cell is measured as plain text, not as terminal
    //! output, and the same text must always measure the same way.
    //!
    //! # Example
    //! ```
    //! use gridfmt_core::text_width::{display_width, field_width};
    //!
    //! assert_eq!(display_width("Name"), 4);
    //! assert_eq!(display_width("\u{4F60}a"), 3);
    //! assert_eq!(field_width("short\nlonger line"), 11);
    //! ```

    use unicode_width::UnicodeWidthChar;

    /// Whether `ch` belongs to the East Asian Wide or Fullwidth class.
    ///
    /// Classification follows the `unicode-width` tables (display width 2),
    /// except for the few scalars where those tables disagree with the
    /// East Asian Width property: the W-class combining and filler marks
    /// listed below are wide, and U+17A4 (W in `unicode-width`, N in EAW)
    /// is not.
    #[inline]
    #[must_use]
    pub fn is_wide(ch: char) -> bool {
        if ch.is_ascii() {
            return false;
        }
        match ch {
            // Ideographic tone marks, kana voicing marks, Hangul filler,
            // Khitan filler and Vietnamese reading marks.
            '\u{302A}'..='\u{302F}'
            | '\u{3099}'
            | '\u{309A}'
            | '\u{3164}'
            | '\u{16FE4}'
            | '\u{16FF0}'
            | '\u{16FF1}' => true,
            '\u{17A4}' => false,
            _ => ch.width() == Some(2),
        }
    }

    /// Width of a single Unicode scalar (1 or 2).
    #[inline]
    #[must_use]
    pub fn char_width(ch: char) -> usize {
        if is_wide(ch) { 2 } else { 1 }
    }

    /// Fast-path width for pure ASCII.
    ///
    /// Every ASCII byte is one column under this metric, tabs and other
    /// control characters included.
    #[inline]
    #[must_use]
    pub fn ascii_width(text: &str) -> Option<usize> {
        text.is_ascii().then_some(text.len())
    }

    /// Width of a string in columns.
    ///
    /// Line breaks are not special here; use [`field_width`] for text that
    /// spans several lines.
    #[inline]
    #[must_use]
    pub fn display_width(text: &str) -> usize {
        if let Some(width) = ascii_width(text) {
            return width;
        }
        text.chars().map(char_width).sum()
    }

    /// Width of a possibly multi-line field: the widest of its lines.
    ///
    /// Returns 0 for the empty string.
    #[must_use]
    pub fn field_width(text: &str) -> usize {
        text.split('\n').map(display_width).max().unwrap_or(0)
    }


    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn width_is_between_char_count_and_twice_it(s in "\\PC{0,40}") {
                let chars = s.chars().count();
                let width = display_width(&s);
                prop_assert!(width >= chars);
                prop_assert!(width <= chars * 2);
            }

            #[test]
            fn width_is_additive(a in "\\PC{0,20}", b in "\\PC{0,20}") {
                let joined = format!("{a}{b}");
                prop_assert_eq!(display_width(&joined), display_width(&a) + display_width(&b));
            }

            #[test]
            fn field_width_bounds_every_line(s in "[a-z\u{4E00}-\u{4E20}\n ]{0,40}") {
                let field = field_width(&s);
                for line in s.split('\n') {
                    prop_assert!(display_width(line) <= field);
                }
            }
        }
    }
}
