//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config::DEFAULT_PACKAGE;

/// One-line usage printed when the tool is invoked without any argument.
pub const USAGE: &str = "Usage: gen-descriptors [--prefix=<PATH_PREFIX>] [--debug] <file1> <file2> ...";

// Repeated options override earlier ones; unique long-flag prefixes are accepted.

/// Generate a Go table of static asset descriptors (path + MIME type)
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about,
    long_about = None,
    args_override_self = true,
    infer_long_args = true
)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Prefix to strip from input files
    #[arg(short, long, value_name = "PATH_PREFIX")]
    pub prefix: Option<String>,

    /// Enable debug mode (keep `.map` source maps in the table)
    #[arg(long)]
    pub debug: bool,

    /// Go package clause of the generated file
    #[arg(long, default_value = DEFAULT_PACKAGE, value_name = "NAME")]
    pub package: String,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to describe. They are never opened; only their names matter.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
