//! Function Header Grammar for Go
//!
//! Recognizes the two header shapes the translator understands:
//! - Receiver: `func (s *Stack) Push(v int) bool {`
//! - Plain: `func Add(x int, y int) int {`
//!
//! Recognition only. Formatting lives in `function_def_translate`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error_msg::{Result, TranslateError};

/// Substring that marks a line as a header candidate
pub const FUNC_KEYWORD: &str = "func";

static RECEIVER_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"func\s+\((\w+)\s+\*(\w+)\)\s+(\w+)\((.*?)\)\s*(\w+)?").unwrap()
});
static PLAIN_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"func\s+(\w+)\((.*?)\)\s*(\w+)?").unwrap());

/// A parsed `name type` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub param_type: String,
}

/// Name, raw parameter text and return type shared by both header shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionHeader {
    pub name: String,
    /// Text between the parentheses, unparsed
    pub raw_params: String,
    pub return_type: Option<String>,
}

/// Result of matching one line against the header shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMatch {
    /// `func (r *T) Name(...) Ret`
    Receiver {
        receiver_name: String,
        receiver_type: String,
        header: FunctionHeader,
    },
    /// `func Name(...) Ret`
    Plain(FunctionHeader),
    NoMatch,
}

impl HeaderMatch {
    pub fn is_match(&self) -> bool {
        !matches!(self, HeaderMatch::NoMatch)
    }
}

/// Match a line against the receiver shape, then the plain shape.
///
/// Patterns are searched anywhere in the line. Lines without `func` are
/// never headers.
pub fn match_header(line: &str) -> HeaderMatch {
    if !line.contains(FUNC_KEYWORD) {
        return HeaderMatch::NoMatch;
    }

    if let Some(caps) = RECEIVER_HEADER.captures(line) {
        return HeaderMatch::Receiver {
            receiver_name: caps[1].to_string(),
            receiver_type: caps[2].to_string(),
            header: FunctionHeader {
                name: caps[3].to_string(),
                raw_params: caps[4].to_string(),
                return_type: caps.get(5).map(|m| m.as_str().to_string()),
            },
        };
    }

    if let Some(caps) = PLAIN_HEADER.captures(line) {
        return HeaderMatch::Plain(FunctionHeader {
            name: caps[1].to_string(),
            raw_params: caps[2].to_string(),
            return_type: caps.get(3).map(|m| m.as_str().to_string()),
        });
    }

    HeaderMatch::NoMatch
}

/// Split raw parameter text into `name type` pairs.
///
/// Empty text means no parameters. Every comma-separated entry must hold
/// exactly two whitespace-separated tokens; `line` is the one-based line
/// number reported on failure.
pub fn parse_parameters(raw_params: &str, line: usize) -> Result<Vec<Parameter>> {
    if raw_params.is_empty() {
        return Ok(Vec::new());
    }

    raw_params
        .split(',')
        .map(|entry| {
            let tokens: Vec<&str> = entry.split_whitespace().collect();
            match tokens.as_slice() {
                [name, param_type] => Ok(Parameter {
                    name: name.to_string(),
                    param_type: param_type.to_string(),
                }),
                _ => Err(TranslateError::MalformedParameter {
                    line,
                    entry: entry.trim().to_string(),
                }),
            }
        })
        .collect()
}
