// Formatting settings, loaded from the embedded default or a JSON file given on the command line
use std::fs;
use std::path::Path;

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use shared::CurrencyCode;
use tracing::{debug, info};

use crate::error::CliError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormatSettings {
    /// Currency used when `currency` is called without `--currency`.
    pub default_currency: CurrencyCode,
    /// Offset zoned timestamps are shown in, e.g. "+08:00".
    pub display_offset: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            default_currency: CurrencyCode::ringgit(),
            display_offset: "+08:00".to_string(),
        }
    }
}

impl FormatSettings {
    pub fn load_default() -> Result<Self, CliError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CliError> {
        info!("Loading settings from {}", path.display());
        let config_str = fs::read_to_string(path)?;
        Self::from_json(&config_str)
    }

    /// Settings from `path` if given, otherwise the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load_default(),
        }
    }

    pub fn from_json(config_str: &str) -> Result<Self, CliError> {
        let settings: FormatSettings = serde_json::from_str(config_str)?;
        // Surface a bad offset at load time rather than on first use.
        settings.offset()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn offset(&self) -> Result<FixedOffset, CliError> {
        parse_offset(&self.display_offset)
    }
}

/// Parses `+HH:MM`, `-HH:MM` or `Z`.
pub fn parse_offset(s: &str) -> Result<FixedOffset, CliError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    s.parse::<FixedOffset>()
        .map_err(|e| CliError::Config(format!("invalid display offset '{}': {}", s, e)))
}
