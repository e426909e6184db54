// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Bugsy - token dump tool and REPL for the Bugsy scripting language
//!
//! This is the main entry point for the bugsy CLI/REPL.
//!
//! ## Features
//!
//! - Interactive REPL with token-aware highlighting and history
//! - Async file loading with tokio
//! - Parallel scanning of multiple scripts

mod format;
mod repl;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use bugsy_lexer::parallel::scan_all;
use bugsy_lexer::{scan, DiagnosticSink};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use report::Reporter;

/// Exit status when a script had lexical errors.
const EXIT_DATA_ERROR: u8 = 65;
/// Exit status when a script could not be read.
const EXIT_NO_INPUT: u8 = 66;

/// Bugsy - scan Bugsy scripts and print their tokens
#[derive(Parser, Debug)]
#[command(name = "bugsy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script files to scan; starts the REPL when none are given
    files: Vec<PathBuf>,

    /// Scan CODE instead of reading a file
    #[arg(short, long, value_name = "CODE", conflicts_with = "files")]
    eval: Option<String>,

    /// Only print diagnostics, not tokens
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point - uses tokio runtime for async file loading.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Some(code) = &cli.eval {
        return run_eval(code, cli.quiet);
    }

    if cli.files.is_empty() {
        return run_repl();
    }

    run_files(&cli.files, cli.quiet).await
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "bugsy=debug,bugsy_lexer=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the interactive REPL
fn run_repl() -> ExitCode {
    match repl::Repl::new() {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                eprintln!("{}: {:?}", "REPL Error".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}: Failed to initialize REPL: {:?}",
                "Error".red().bold(),
                e
            );
            ExitCode::FAILURE
        }
    }
}

/// Scan code given on the command line.
fn run_eval(code: &str, quiet: bool) -> ExitCode {
    let mut reporter = Reporter::new(code);
    let tokens = scan(code, &mut reporter);

    if !quiet {
        format::print_tokens(&tokens);
    }

    exit_status(reporter.had_error())
}

/// Read every script, scan them in parallel, then print results in order.
async fn run_files(paths: &[PathBuf], quiet: bool) -> ExitCode {
    let sources = match read_sources(paths).await {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };

    let texts: Vec<&str> = sources.iter().map(String::as_str).collect();
    let outputs = scan_all(&texts);

    let mut had_error = false;
    for ((path, source), output) in paths.iter().zip(&texts).zip(outputs) {
        let origin = path.display().to_string();

        if !quiet {
            if paths.len() > 1 {
                println!("{}", format!("==> {} <==", origin).bright_cyan().bold());
            }
            format::print_tokens(&output.tokens);
        }

        let mut reporter = Reporter::new(source).with_origin(&origin);
        for diagnostic in output.diagnostics {
            reporter.report(diagnostic);
        }
        had_error |= reporter.had_error();
    }

    exit_status(had_error)
}

/// Load every script, failing on the first one that cannot be read.
async fn read_sources(paths: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    let mut sources = Vec::with_capacity(paths.len());

    for path in paths {
        sources.push(read_source(path).await?);
    }

    Ok(sources)
}

async fn read_source(path: &Path) -> anyhow::Result<String> {
    let source = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = source.len(), "loaded script");

    Ok(source)
}

fn exit_status(had_error: bool) -> ExitCode {
    if had_error {
        ExitCode::from(EXIT_DATA_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}
