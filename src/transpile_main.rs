//! Main Transpilation Pipeline
//!
//! Orchestrates the Go to Mojo passes in a fixed order:
//!
//! ```text
//! 1. comments        `//` → `#`
//! 2. functions       `func f(a int) int {` → `fn f(a: int) -> int:`
//! 3. docstrings      `#` block above a header → `"""` block below it
//! 4. control flow    `if` / `for` headers → colon form
//! 5. declarations    `var x T`, `x := e` → `var` forms
//! 6. braces          delete `{` and `}`
//! ```
//!
//! Comments must precede docstrings: the backward scan matches `#`.
//! Docstrings must follow functions: the scan finds headers by their
//! translated `fn ...:` shape.

use log::debug;

use crate::comment_translate::translate_comments;
use crate::control_flow::translate_control_structures;
use crate::docstring_lowering::promote_docstrings;
use crate::error_msg::Result;
use crate::function_def_translate::translate_function_definitions;
use crate::line_normalizer::{join_lines, normalize_lines};
use crate::postprocess::remove_braces;
use crate::transpiler_options::TranslateOptions;
use crate::variable::translate_variable_declarations;

/// One stage of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Comments,
    FunctionDefinitions,
    Docstrings,
    ControlStructures,
    VariableDeclarations,
    Braces,
}

/// Execution order of the passes
pub const PIPELINE: [Pass; 6] = [
    Pass::Comments,
    Pass::FunctionDefinitions,
    Pass::Docstrings,
    Pass::ControlStructures,
    Pass::VariableDeclarations,
    Pass::Braces,
];

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::Comments => "comments",
            Pass::FunctionDefinitions => "function-definitions",
            Pass::Docstrings => "docstrings",
            Pass::ControlStructures => "control-structures",
            Pass::VariableDeclarations => "variable-declarations",
            Pass::Braces => "braces",
        }
    }

    /// Run this pass over the full line sequence
    pub fn apply(self, lines: Vec<String>, options: &TranslateOptions) -> Result<Vec<String>> {
        match self {
            Pass::Comments => Ok(translate_comments(lines)),
            Pass::FunctionDefinitions => translate_function_definitions(lines),
            Pass::Docstrings => promote_docstrings(lines, options),
            Pass::ControlStructures => Ok(translate_control_structures(lines)),
            Pass::VariableDeclarations => Ok(translate_variable_declarations(lines)),
            Pass::Braces => Ok(remove_braces(lines)),
        }
    }
}

/// Run `passes` in order, each consuming the previous output
pub fn run_passes(
    passes: &[Pass],
    lines: Vec<String>,
    options: &TranslateOptions,
) -> Result<Vec<String>> {
    passes.iter().try_fold(lines, |lines, pass| {
        let output = pass.apply(lines, options)?;
        debug!("pass {}: {} line(s)", pass.name(), output.len());
        Ok(output)
    })
}

/// Translate Go source to Mojo with the given options
pub fn translate_with_options(source: &str, options: &TranslateOptions) -> Result<String> {
    let lines = normalize_lines(source);
    let translated = run_passes(&PIPELINE, lines, options)?;
    Ok(join_lines(&translated))
}

/// Translate Go source to Mojo with default options
pub fn translate_go_to_mojo(source: &str) -> Result<String> {
    translate_with_options(source, &TranslateOptions::default())
}
