//! gomojo: line-based Go to Mojo transpiler
//!
//! Rewrites Go source into Mojo surface syntax one pattern at a time. No
//! syntax tree is built; inputs outside the recognized patterns pass through
//! and may produce invalid Mojo.

// Core modules
pub mod function;
pub mod function_def_translate;
pub mod docstring_lowering;
pub mod error_msg;

// Stateless passes
pub mod comment_translate;
pub mod control_flow;
pub mod variable;
pub mod postprocess;

// Pipeline
pub mod line_normalizer;
pub mod transpiler_options;
pub mod transpile_main;


use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

pub use error_msg::{Result, TranslateError};
pub use transpile_main::{translate_go_to_mojo, translate_with_options, Pass, PIPELINE};
pub use transpiler_options::TranslateOptions;

pub const SOURCE_EXTENSION: &str = "go";
pub const TARGET_EXTENSION: &str = "mojo";

/// Sibling output path for an input file.
///
/// `main.go` becomes `main.mojo`. Any other name gets `.mojo` appended so
/// the input is never overwritten.
pub fn output_path_for(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
        return input.with_extension(TARGET_EXTENSION);
    }
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(TARGET_EXTENSION);
    PathBuf::from(name)
}

/// Read `input`, translate it and write the result to `output`.
///
/// Nothing is written unless translation succeeds.
pub fn translate_file(input: &Path, output: &Path, options: &TranslateOptions) -> Result<()> {
    let source = fs::read_to_string(input).map_err(|e| TranslateError::io(input, e))?;
    debug!("read {} byte(s) from {}", source.len(), input.display());

    let translated = translate_with_options(&source, options)?;
    fs::write(output, translated).map_err(|e| TranslateError::io(output, e))?;
    Ok(())
}
