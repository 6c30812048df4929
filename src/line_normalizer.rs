//! LINE NORMALIZER
//!
//! Splits source text into the line sequence every pass works on, and joins
//! it back.
//!
//! Splitting is on `\n` only, so a trailing newline yields a trailing empty
//! line. `\r\n` is folded to `\n` first.

/// Split source into lines. `"a\nb\n"` becomes `["a", "b", ""]`.
pub fn normalize_lines(source: &str) -> Vec<String> {
    source
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Join lines back into text with `\n` separators
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_newline_keeps_empty_line() {
        assert_eq!(normalize_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_crlf_folded() {
        assert_eq!(normalize_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_source_is_one_empty_line() {
        assert_eq!(normalize_lines(""), vec![""]);
    }

    #[test]
    fn test_join_inverts_split() {
        let source = "func main() {\n\tx := 1\n}\n";
        assert_eq!(join_lines(&normalize_lines(source)), source);
    }
}
