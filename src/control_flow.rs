//! Control Flow Translation
//!
//! Single-line rewrites of `if` and `for` headers:
//! - `if x > 0 {` → `if x > 0:`
//! - `for i, v := range xs {` → `for i, v in enumerate(xs):`
//! - `for v := range xs {` → `for v in xs:`
//! - `for i := 0; i < n; i++ {` → `for i := 0 in range(i < n, i++):`
//!
//! The three-clause form is carried over textually; the declaration pass
//! later turns its `:=` into `var`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Rewrite rules, applied in order to every line
static CONTROL_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"if (.+) \{").unwrap(), "if ${1}:"),
        (
            Regex::new(r"for (\w+), (\w+) := range (.+) \{").unwrap(),
            "for ${1}, ${2} in enumerate(${3}):",
        ),
        (
            Regex::new(r"for (\w+) := range (.+) \{").unwrap(),
            "for ${1} in ${2}:",
        ),
        (
            Regex::new(r"for (.+); (.+); (.+) \{").unwrap(),
            "for ${1} in range(${2}, ${3}):",
        ),
    ]
});

/// Apply every control-flow rule to one line
pub fn transform_control_line(line: &str) -> String {
    CONTROL_RULES
        .iter()
        .fold(line.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}

/// Control-flow pass
pub fn translate_control_structures(lines: Vec<String>) -> Vec<String> {
    lines.iter().map(|line| transform_control_line(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if() {
        assert_eq!(transform_control_line("\tif x > 0 {"), "\tif x > 0:");
    }

    #[test]
    fn test_else_if_keeps_leading_brace() {
        assert_eq!(transform_control_line("} else if x < 0 {"), "} else if x < 0:");
    }

    #[test]
    fn test_range_with_index() {
        assert_eq!(
            transform_control_line("for i, v := range items {"),
            "for i, v in enumerate(items):"
        );
    }

    #[test]
    fn test_range_single() {
        assert_eq!(
            transform_control_line("for v := range items {"),
            "for v in items:"
        );
    }

    #[test]
    fn test_three_clause_for() {
        assert_eq!(
            transform_control_line("for i := 0; i < n; i++ {"),
            "for i := 0 in range(i < n, i++):"
        );
    }

    #[test]
    fn test_plain_line_untouched() {
        assert_eq!(transform_control_line("return x + y"), "return x + y");
    }
}
