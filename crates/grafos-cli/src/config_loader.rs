//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use grafos_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "grafos.toml";

/// Load layered configuration: defaults, file, environment, then CLI flags
///
/// An explicit `--config` path must exist; the implicit `grafos.toml` is optional.
pub fn load_config(explicit: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let config = match explicit {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?,
        None => LayeredConfig::with_defaults()
            .load_from_optional_file(default_config_path())
            .context("Failed to load configuration file")?,
    };

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}

fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
