//! Comment Marker Translation
//!
//! `//` becomes `#` everywhere on the line, including inside string
//! literals. Must run before the docstring pass, which matches on `#`.

pub const GO_COMMENT_MARKER: &str = "//";
pub const COMMENT_MARKER: &str = "#";

/// Swap every Go comment marker on the line
pub fn translate_comment_line(line: &str) -> String {
    line.replace(GO_COMMENT_MARKER, COMMENT_MARKER)
}

/// Comment pass
pub fn translate_comments(lines: Vec<String>) -> Vec<String> {
    lines.iter().map(|line| translate_comment_line(line)).collect()
}
