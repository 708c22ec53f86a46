//! The `gridfmt` pipeline: decode, select the region, format, splice, encode.

use std::ops::Range;

use gridfmt_table::{format_region, reflow_region, table_bounds};

use crate::cli::Opts;
use crate::encoding::TextCodec;
use crate::error::CliError;

/// Format the table selected by `opts` in `input` and return the whole
/// document, encoded like the input.
///
/// # Errors
///
/// [`CliError::UnknownEncoding`] for a bad label, [`CliError::Usage`] when
/// `--line` is not inside a table, and [`CliError::Table`] when reflow finds
/// no border.
pub fn run(opts: &Opts, input: &[u8]) -> Result<Vec<u8>, CliError> {
    let codec = TextCodec::for_label(&opts.encoding)?;
    let decoded = codec.decode(input);
    let output = format_document(&decoded.text, opts)?;
    Ok(decoded.encode(&output))
}

/// Format the selected table inside `text`, leaving every other line and the
/// document's line endings untouched.
///
/// # Errors
///
/// See [`run`].
pub fn format_document(text: &str, opts: &Opts) -> Result<String, CliError> {
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let lines: Vec<&str> = text.lines().collect();

    let region = select_region(&lines, opts.line)?;
    let _span = tracing::debug_span!(
        "format_document",
        start = region.start,
        end = region.end,
        reflow = opts.reflow
    )
    .entered();

    let selected = &lines[region.clone()];
    let formatted = if opts.reflow {
        reflow_region(selected)?
    } else {
        format_region(selected)
    };
    tracing::debug!(
        input_lines = selected.len(),
        output_lines = formatted.len(),
        "region formatted"
    );

    let mut out = String::with_capacity(text.len() + formatted.len() * 8);
    let spliced = lines[..region.start]
        .iter()
        .copied()
        .chain(formatted.iter().map(String::as_str))
        .chain(lines[region.end..].iter().copied());
    for (index, line) in spliced.enumerate() {
        if index > 0 {
            out.push_str(newline);
        }
        out.push_str(line);
    }
    if text.ends_with('\n') && !out.is_empty() {
        out.push_str(newline);
    }
    Ok(out)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// The table around `line` (1-based), or the input minus its leading and
/// trailing blank lines.
fn select_region(lines: &[&str], line: Option<usize>) -> Result<Range<usize>, CliError> {
    match line {
        Some(line) => table_bounds(lines, line.saturating_sub(1))
            .ok_or_else(|| CliError::Usage(format!("line {line} is not inside a table"))),
        None => {
            let start = lines
                .iter()
                .position(|line| !is_blank(line))
                .unwrap_or(lines.len());
            let end = lines
                .iter()
                .rposition(|line| !is_blank(line))
                .map_or(start, |last| last + 1);
            Ok(start..end)
        }
    }
}
