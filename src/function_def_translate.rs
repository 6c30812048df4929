//! Function Definition Translation
//!
//! Translates Go function headers to Mojo syntax.
//!
//! Go header syntax:
//! ```text
//! func (s *Stack) Push(v int) bool {
//! ```
//!
//! Mojo header syntax:
//! ```text
//! fn Push(s, v: int) -> bool:
//! ```

use log::warn;

use crate::error_msg::Result;
use crate::function::{match_header, parse_parameters, FunctionHeader, HeaderMatch, FUNC_KEYWORD};

/// Result of processing one line in the header pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionDefResult {
    /// Line was a header and has been rewritten
    Handled(String),
    /// Not a function definition
    NotFunctionDef,
}

/// Build the Mojo header line for a match. `line` is one-based and only
/// used for error reporting.
///
/// Returns `None` for `HeaderMatch::NoMatch`.
pub fn rewrite_header(header_match: &HeaderMatch, line: usize) -> Result<Option<String>> {
    let (receiver, header) = match header_match {
        HeaderMatch::Receiver {
            receiver_name,
            header,
            ..
        } => (Some(receiver_name.as_str()), header),
        HeaderMatch::Plain(header) => (None, header),
        HeaderMatch::NoMatch => return Ok(None),
    };

    let arg_string = build_arg_string(receiver, header, line)?;
    let return_string = header
        .return_type
        .as_ref()
        .map(|ret| format!(" -> {}", ret))
        .unwrap_or_default();

    Ok(Some(format!("fn {}({}){}:", header.name, arg_string, return_string)))
}

/// Receiver name first (bare), then `name: type` pairs
fn build_arg_string(receiver: Option<&str>, header: &FunctionHeader, line: usize) -> Result<String> {
    let params = parse_parameters(&header.raw_params, line)?;
    let typed: Vec<String> = params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.param_type))
        .collect();

    let mut arg_string = receiver.unwrap_or_default().to_string();
    if !typed.is_empty() {
        if !arg_string.is_empty() {
            arg_string.push_str(", ");
        }
        arg_string.push_str(&typed.join(", "));
    }
    Ok(arg_string)
}

/// Process a single line. `line_num` is zero-based.
///
/// Lines that mention `func` without matching either header shape are
/// logged and passed through.
pub fn process_function_def(line: &str, line_num: usize) -> Result<FunctionDefResult> {
    if !line.contains(FUNC_KEYWORD) {
        return Ok(FunctionDefResult::NotFunctionDef);
    }

    match rewrite_header(&match_header(line), line_num + 1)? {
        Some(header) => Ok(FunctionDefResult::Handled(header)),
        None => {
            warn!("line {}: unrecognized function header: {}", line_num + 1, line);
            Ok(FunctionDefResult::NotFunctionDef)
        }
    }
}

/// Header pass: rewrite every recognized header line
pub fn translate_function_definitions(lines: Vec<String>) -> Result<Vec<String>> {
    lines
        .into_iter()
        .enumerate()
        .map(|(line_num, line)| match process_function_def(&line, line_num)? {
            FunctionDefResult::Handled(header) => Ok(header),
            FunctionDefResult::NotFunctionDef => Ok(line),
        })
        .collect()
}
