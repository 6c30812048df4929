//! Post-processing functions for the Go to Mojo transpiler
//!
//! Blocks are carried by indentation in Mojo, so every `{` and `}` is
//! deleted, including ones inside string literals.

/// Remove all braces from a line
pub fn strip_braces(line: &str) -> String {
    line.chars().filter(|c| !matches!(c, '{' | '}')).collect()
}

/// Brace removal pass
pub fn remove_braces(lines: Vec<String>) -> Vec<String> {
    lines.iter().map(|line| strip_braces(line)).collect()
}
