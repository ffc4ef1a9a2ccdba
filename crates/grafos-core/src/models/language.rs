//! Interface language and its number separators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GrafosError;

/// Display language for labels, status messages and number formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Separator inserted between groups of three integer digits
    pub fn group_separator(&self) -> char {
        match self {
            Language::Es => '.',
            Language::En => ',',
        }
    }

    /// Separator between the integer and fractional digits
    pub fn decimal_separator(&self) -> char {
        match self {
            Language::Es => ',',
            Language::En => '.',
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GrafosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Language::Es),
            "en" | "english" => Ok(Language::En),
            _ => Err(GrafosError::ConfigInvalid {
                key: "language".to_string(),
                reason: format!("Unsupported language: {}. Use es or en", s),
            }),
        }
    }
}
