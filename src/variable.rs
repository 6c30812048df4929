//! Variable Declaration Translation
//!
//! - `var count int` → `var count: int`
//! - `total := a + b` → `var total = a + b`

use once_cell::sync::Lazy;
use regex::Regex;

static TYPED_DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"var (\w+) (\w+)").unwrap());
static SHORT_DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+) := (.+)").unwrap());

/// Rewrite typed and short declarations on one line
pub fn transform_declaration_line(line: &str) -> String {
    let typed = TYPED_DECLARATION.replace_all(line, "var ${1}: ${2}");
    SHORT_DECLARATION
        .replace_all(&typed, "var ${1} = ${2}")
        .into_owned()
}

/// Declaration pass
pub fn translate_variable_declarations(lines: Vec<String>) -> Vec<String> {
    lines
        .iter()
        .map(|line| transform_declaration_line(line))
        .collect()
}
