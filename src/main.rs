//! gen-descriptors - Generate a Go table of bundled static assets.
//!
//! Reads file paths from the command line, strips an optional prefix,
//! infers a MIME type from each name and prints a Go source file declaring
//! `AssetDescriptors()`. Files are never opened.

mod asset;
mod cli;
mod config;
mod core;
mod embed;
mod generate;
mod logger;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, USAGE};
use config::GenerateOptions;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    // Bare invocation is rejected before option parsing
    if std::env::args_os().len() < 2 {
        eprintln!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    }

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate the descriptor table for `cli.files` and write it out.
fn run(cli: &Cli) -> Result<()> {
    let options = GenerateOptions::from_cli(cli);
    let source = generate::generate(&cli.files, &options);
    generate::write_output(&source, cli.output.as_deref())
        .context("could not emit generated source")?;
    Ok(())
}
