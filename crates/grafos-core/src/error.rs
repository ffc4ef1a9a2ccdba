//! Error types for Grafos

use thiserror::Error;

/// Error code the backend attaches when the OSM/Overpass data source is unreachable
pub const SOURCE_UNAVAILABLE_CODE: &str = "osm_unavailable";

#[derive(Debug, Error)]
pub enum GrafosError {
    // Backend errors
    #[error("Backend unreachable: {reason}")]
    Transport { reason: String },

    #[error("{}", .message.as_deref().unwrap_or("Analysis request failed"))]
    Service {
        status: u16,
        message: Option<String>,
        code: Option<String>,
    },

    #[error("Malformed backend response: {reason}")]
    Decode { reason: String },

    // Lifecycle errors
    #[error("An analysis is already running")]
    AlreadyPending,

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrafosError {
    /// True when the backend reported that its street-network data source is unreachable
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            GrafosError::Service { code: Some(code), .. } if code == SOURCE_UNAVAILABLE_CODE
        )
    }
}

pub type Result<T> = std::result::Result<T, GrafosError>;
