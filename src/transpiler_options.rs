//! Transpiler Options
//!
//! Holds the knobs that change translation output. Everything else in the
//! pipeline is fixed.

/// Options for a single translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Keep the last line of the input.
    ///
    /// The docstring splice copies lines up to, but not including, the final
    /// line. Off by default.
    pub keep_final_line: bool,
}

impl TranslateOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self {
            keep_final_line: false,
        }
    }

    pub fn keep_final_line(mut self, keep: bool) -> Self {
        self.keep_final_line = keep;
        self
    }
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drops_final_line() {
        assert!(!TranslateOptions::default().keep_final_line);
    }

    #[test]
    fn test_builder_sets_keep_final_line() {
        let options = TranslateOptions::new().keep_final_line(true);
        assert!(options.keep_final_line);
    }
}
