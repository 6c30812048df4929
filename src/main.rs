//! gomojo command line entry point
//!
//! ```text
//! gomojo main.go              writes main.mojo next to main.go
//! gomojo main.go -o out.mojo  writes out.mojo
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use gomojo::{output_path_for, translate_file, TranslateOptions};

#[derive(Parser, Debug)]
#[command(name = "gomojo")]
#[command(about = "Translate Go source files to Mojo", long_about = None)]
#[command(version)]
struct Cli {
    /// Go source file to translate
    input: PathBuf,

    /// Output file (defaults to the input path with a .mojo extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep the last line of the input, which is dropped by default
    #[arg(long)]
    keep_final_line: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&cli.input));
    let options = TranslateOptions::new().keep_final_line(cli.keep_final_line);

    translate_file(&cli.input, &output, &options)
        .with_context(|| format!("failed to translate {}", cli.input.display()))?;

    info!("wrote {}", output.display());
    Ok(())
}
