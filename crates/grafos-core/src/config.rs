use crate::error::{GrafosError, Result};
use crate::models::{AnalysisForm, Language};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default backend location
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the Grafos client
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub backend_url: ConfigValue<String>,
    pub language: ConfigValue<Language>,
    pub city: ConfigValue<String>,
    pub mode: ConfigValue<String>,
    pub radius_km: ConfigValue<f64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let form = AnalysisForm::default();
        Self {
            backend_url: ConfigValue::new(DEFAULT_BACKEND_URL.to_string(), ConfigSource::Default),
            language: ConfigValue::new(Language::default(), ConfigSource::Default),
            city: ConfigValue::new(form.city, ConfigSource::Default),
            mode: ConfigValue::new(form.mode, ConfigSource::Default),
            radius_km: ConfigValue::new(form.radius_km, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GrafosError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(backend_url) = file_config.backend_url {
            self.backend_url.update(backend_url, ConfigSource::File);
        }

        if let Some(language) = file_config.language {
            self.language.update(language, ConfigSource::File);
        }

        if let Some(city) = file_config.city {
            self.city.update(city, ConfigSource::File);
        }

        if let Some(mode) = file_config.mode {
            self.mode.update(mode, ConfigSource::File);
        }

        if let Some(radius_km) = file_config.radius_km {
            validate_radius(radius_km)?;
            self.radius_km.update(radius_km, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load a TOML file when it exists, keep the current values otherwise
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GRAFOS_BACKEND_URL
        if let Ok(url) = env::var("GRAFOS_BACKEND_URL") {
            self.backend_url.update(url, ConfigSource::Environment);
        }

        // GRAFOS_LANGUAGE
        if let Ok(language_str) = env::var("GRAFOS_LANGUAGE") {
            match language_str.parse::<Language>() {
                Ok(language) => self.language.update(language, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GRAFOS_LANGUAGE value '{}': expected es or en",
                    language_str
                ),
            }
        }

        // GRAFOS_CITY
        if let Ok(city) = env::var("GRAFOS_CITY") {
            self.city.update(city, ConfigSource::Environment);
        }

        // GRAFOS_MODE
        if let Ok(mode) = env::var("GRAFOS_MODE") {
            self.mode.update(mode, ConfigSource::Environment);
        }

        // GRAFOS_RADIUS_KM
        if let Ok(radius_str) = env::var("GRAFOS_RADIUS_KM") {
            match radius_str.parse::<f64>() {
                Ok(radius) if validate_radius(radius).is_ok() => {
                    self.radius_km.update(radius, ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid GRAFOS_RADIUS_KM value '{}': expected a positive number",
                    radius_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(backend_url) = overrides.backend_url {
            self.backend_url.update(backend_url, ConfigSource::Cli);
        }

        if let Some(language) = overrides.language {
            self.language.update(language, ConfigSource::Cli);
        }
    }

    /// Form pre-filled with the configured defaults
    pub fn default_form(&self) -> AnalysisForm {
        AnalysisForm {
            city: self.city.value.clone(),
            mode: self.mode.value.clone(),
            radius_km: self.radius_km.value,
            ..Default::default()
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "backend_url".to_string(),
            (self.backend_url.value.clone(), self.backend_url.source),
        );

        map.insert(
            "language".to_string(),
            (self.language.value.to_string(), self.language.source),
        );

        map.insert("city".to_string(), (self.city.value.clone(), self.city.source));

        map.insert("mode".to_string(), (self.mode.value.clone(), self.mode.source));

        map.insert(
            "radius_km".to_string(),
            (self.radius_km.value.to_string(), self.radius_km.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    backend_url: Option<String>,
    language: Option<Language>,
    city: Option<String>,
    mode: Option<String>,
    radius_km: Option<f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub backend_url: Option<String>,
    pub language: Option<Language>,
}

fn validate_radius(radius_km: f64) -> Result<()> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(())
    } else {
        Err(GrafosError::ConfigInvalid {
            key: "radius_km".to_string(),
            reason: format!("Radius must be a positive number of kilometers, got {}", radius_km),
        })
    }
}
