//! Docstring Lowering
//!
//! Moves the comment block sitting directly above a translated header into
//! a docstring inside the function body:
//!
//! ```text
//! # Add adds two numbers.          fn Add(x: int, y: int) -> int:
//! fn Add(x: int, y: int) -> int:       """
//!                               =>     Add adds two numbers.
//!                                      """
//! ```
//!
//! Runs on already-translated lines, so it looks for `#` comments and `fn`
//! headers. Spans are computed first without touching the lines, then a
//! single forward pass splices them.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::comment_translate::COMMENT_MARKER;
use crate::error_msg::{Result, TranslateError};
use crate::transpiler_options::TranslateOptions;

pub const DOCSTRING_DELIMITER: &str = "\"\"\"";
pub const DOCSTRING_INDENT: &str = "    ";

static TRANSLATED_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^fn \w+\(.*\)(?: -> \w+)?:$").unwrap());

/// A comment block `[start, header)` attached to the header at `header`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocstringSpan {
    pub start: usize,
    pub header: usize,
}

impl DocstringSpan {
    pub fn is_empty(&self) -> bool {
        self.start == self.header
    }
}

/// True for lines produced by the header pass
pub fn is_translated_header(line: &str) -> bool {
    TRANSLATED_HEADER.is_match(line)
}

fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.starts_with(COMMENT_MARKER)
}

/// Scan backward from `header` to the first blank or non-comment line
pub fn find_comment_block(lines: &[String], header: usize) -> DocstringSpan {
    let start = lines[..header]
        .iter()
        .rposition(|line| !is_comment_line(line))
        .map_or(0, |stop| stop + 1);
    DocstringSpan { start, header }
}

/// Spans for every translated header, in forward order. Empty spans are
/// kept so callers can see headers without docstrings.
pub fn collect_docstring_spans(lines: &[String]) -> Vec<DocstringSpan> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_translated_header(line))
        .map(|(header, _)| find_comment_block(lines, header))
        .collect()
}

/// Format one comment line as a docstring body line
fn docstring_line(line: &str, line_num: usize) -> Result<String> {
    let trimmed = line.trim();
    let text = trimmed
        .strip_prefix(COMMENT_MARKER)
        .ok_or_else(|| TranslateError::DocstringInvariant {
            line: line_num + 1,
            text: line.to_string(),
        })?;
    Ok(format!("{}{}", DOCSTRING_INDENT, text.trim()))
}

/// Splice docstrings into place.
///
/// Unless `keep_final_line` is set the last input line is not copied.
pub fn splice_docstrings(
    lines: &[String],
    spans: &[DocstringSpan],
    options: &TranslateOptions,
) -> Result<Vec<String>> {
    let mut output = Vec::with_capacity(lines.len() + spans.len() * 2);
    let mut cursor = 0;

    for span in spans.iter().filter(|span| !span.is_empty()) {
        output.extend_from_slice(&lines[cursor..span.start]);
        output.push(lines[span.header].clone());
        output.push(format!("{}{}", DOCSTRING_INDENT, DOCSTRING_DELIMITER));
        for (offset, line) in lines[span.start..span.header].iter().enumerate() {
            output.push(docstring_line(line, span.start + offset)?);
        }
        output.push(format!("{}{}", DOCSTRING_INDENT, DOCSTRING_DELIMITER));

        debug!(
            "promoted {} comment line(s) into docstring of line {}",
            span.header - span.start,
            span.header + 1
        );
        cursor = span.header + 1;
    }

    let end = if options.keep_final_line {
        lines.len()
    } else {
        lines.len().saturating_sub(1)
    };
    if cursor < end {
        output.extend_from_slice(&lines[cursor..end]);
    }

    Ok(output)
}

/// Docstring pass
pub fn promote_docstrings(lines: Vec<String>, options: &TranslateOptions) -> Result<Vec<String>> {
    let spans = collect_docstring_spans(&lines);
    splice_docstrings(&lines, &spans, options)
}
