//! Grafos CLI - Command-line interface
//!
//! Drives the analysis service from a terminal and renders results headlessly.

mod cli;
mod commands;
mod config_loader;
mod output;
mod output_types;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(commands::execute(cli)) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is::<commands::AlreadyReported>() => Ok(ExitCode::FAILURE),
        Err(err) => Err(err),
    }
}
