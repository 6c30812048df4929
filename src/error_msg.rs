//! Translation Errors
//!
//! Every failure the translator can report. Unrecognized header-like
//! lines are not errors; they pass through and are logged instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while translating Go source to Mojo.
/// Line numbers are one-based.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A parameter entry did not split into a `name type` pair
    #[error("malformed parameter `{entry}` on line {line}: expected `name type`")]
    MalformedParameter { line: usize, entry: String },

    /// The forward splice found a non-comment line inside a comment block.
    /// Indicates the span scan and the splice disagree.
    #[error("internal error: docstring line {line} lost its comment marker: `{text}`")]
    DocstringInvariant { line: usize, text: String },

    /// Reading the input or writing the output failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranslateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// One-based line number the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedParameter { line, .. } | Self::DocstringInvariant { line, .. } => {
                Some(*line)
            }
            Self::Io { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_parameter_message() {
        let err = TranslateError::MalformedParameter {
            line: 4,
            entry: "a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed parameter `a` on line 4: expected `name type`"
        );
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_io_error_has_no_line() {
        let err = TranslateError::io(
            "missing.go",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.go"));
        assert_eq!(err.line(), None);
    }
}
