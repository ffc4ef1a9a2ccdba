//! Command implementations

mod analyze;
mod config;
mod health;
mod interactive;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;
use grafos_core::config::CliConfigOverrides;

/// A failure the command already printed; only the exit status remains to report
#[derive(Debug, thiserror::Error)]
#[error("command failed")]
pub struct AlreadyReported;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let overrides = CliConfigOverrides { backend_url: cli.backend_url, language: cli.language };
    let config = load_config(cli.config.as_deref(), overrides)?;

    match cli.command {
        Commands::Analyze(args) => analyze::execute(args, &config, &output).await,
        Commands::Interactive => interactive::execute(&config, &output).await,
        Commands::Health => health::execute(&config, &output).await,
        Commands::Config => config::execute(&config, &output),
    }
}
