//! Text wrapping with display-width correctness.
//!
//! This module wraps a single table cell to a column width. It respects:
//! - Display widths (CJK characters are 2 columns wide)
//! - Word boundaries: lines break at whitespace, or between two wide
//!   characters, since CJK text rarely contains spaces
//! - Grapheme cluster boundaries (a token is never split)
//!
//! A token wider than the target is never broken; it is emitted on a line of
//! its own and the caller decides how to lay it out.
//!
//! # Example
//! ```
//! use gridfmt_text::wrap::wrap;
//!
//! let lines = wrap("Hello world foo bar", 10);
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//!
//! // Ideographs break between characters.
//! let lines = wrap("\u{4F60}\u{597D}\u{4E16}\u{754C}", 4);
//! assert_eq!(lines, vec!["\u{4F60}\u{597D}", "\u{4E16}\u{754C}"]);
//! ```

use gridfmt_core::text_width::{display_width, is_wide};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    /// A whitespace run.
    Blank,
    /// A run of narrow non-whitespace graphemes.
    Word,
    /// A single wide grapheme.
    Wide,
}

/// A run of text between two break opportunities.
#[derive(Debug, Clone, Copy)]
struct Token {
    /// Byte offset into the wrapped text.
    offset: usize,
    /// Byte length.
    bytes: usize,
    /// Grapheme count, the unit of the trial budget.
    graphemes: usize,
    kind: TokenKind,
}

impl Token {
    fn end(&self) -> usize {
        self.offset + self.bytes
    }
}

/// Wrap `text` so that every line fits in `width` display columns.
///
/// Line breaks in the input are collapsed to spaces first, so a multi-line
/// cell is re-wrapped as one paragraph. Leading and trailing whitespace is
/// dropped from every line; whitespace between words is kept as written.
/// Empty or blank input yields no lines.
///
/// The only lines that may exceed `width` are those holding a single token
/// that is wider than `width` on its own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let text = collapse_line_breaks(text);
    let tokens = tokenize(&text);

    let mut lines = Vec::new();
    let mut cursor = 0;
    loop {
        while tokens
            .get(cursor)
            .is_some_and(|token| token.kind == TokenKind::Blank)
        {
            cursor += 1;
        }
        let rest = &tokens[cursor..];
        let Some(first) = rest.first() else {
            break;
        };

        let taken = fit_line(&text, rest, width);
        lines.push(text[first.offset..rest[taken - 1].end()].to_string());
        cursor += taken;
    }
    lines
}

/// Replace every line break with a single space.
fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

fn classify(grapheme: &str) -> TokenKind {
    if grapheme.chars().all(char::is_whitespace) {
        TokenKind::Blank
    } else if grapheme.chars().next().is_some_and(is_wide) {
        TokenKind::Wide
    } else {
        TokenKind::Word
    }
}

/// Split text into blank runs, narrow word runs and single wide graphemes.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<Token> = None;

    for (offset, grapheme) in text.grapheme_indices(true) {
        let kind = classify(grapheme);
        match current.as_mut() {
            Some(token) if token.kind == kind && kind != TokenKind::Wide => {
                token.bytes += grapheme.len();
                token.graphemes += 1;
            }
            _ => {
                tokens.extend(current.take());
                current = Some(Token {
                    offset,
                    bytes: grapheme.len(),
                    graphemes: 1,
                    kind,
                });
            }
        }
    }
    tokens.extend(current);
    tokens
}

/// Greedy first line under a grapheme budget.
///
/// `tokens` must start with a non-blank token. Returns how many tokens the
/// line consumes (always ending on a non-blank token) and how many of them
/// are non-blank. The first token is always taken, whatever its length.
fn greedy_line(tokens: &[Token], budget: usize) -> (usize, usize) {
    let mut taken = 0;
    let mut words = 0;
    let mut used = 0;
    let mut gap = 0;

    for (idx, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Blank {
            gap += token.graphemes;
            continue;
        }
        if words > 0 && used + gap + token.graphemes > budget {
            break;
        }
        used += gap + token.graphemes;
        gap = 0;
        words += 1;
        taken = idx + 1;
    }
    (taken, words)
}

/// Find the first line whose display width fits `width`.
///
/// A greedy wrap counts graphemes, which undercounts wide characters, so the
/// trial budget shrinks by half the overshoot until the line fits. The
/// budget strictly decreases while the line holds more than one token, and
/// a one-token line is accepted as is.
fn fit_line(text: &str, tokens: &[Token], width: usize) -> usize {
    let start = tokens[0].offset;
    let mut budget = width.max(1);
    loop {
        let (taken, words) = greedy_line(tokens, budget);
        let measured = display_width(&text[start..tokens[taken - 1].end()]);
        if measured <= width || words == 1 {
            return taken;
        }
        let overshoot = measured - width;
        let next = budget.saturating_sub(overshoot.div_ceil(2)).max(1);

        #[cfg(feature = "tracing")]
        gridfmt_core::trace!(
            target: gridfmt_core::logging::LOG_TARGET,
            width,
            measured,
            budget,
            next,
            "wrap budget shrunk"
        );

        budget = next;
    }
}
