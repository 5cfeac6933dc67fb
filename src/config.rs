//! Configuration management for the smoke tester

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use reqwest::Url;
use crate::error::{SmokeError, SmokeResult};

/// File the binary picks up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "hunt-smoke.toml";

/// Main configuration for a smoke run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Backend API under test
    pub api: ApiConfig,
    /// Frontend address, only printed in the summary
    pub frontend: FrontendConfig,
    /// Game the run asks the backend to create
    pub game: GameConfig,
    /// Optional follow-up checks against the created session
    pub checks: ChecksConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port the endpoint paths are resolved against
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_string(),
        }
    }
}

/// Game creation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub beast_name: String,
    pub inquisitor_name: String,
    /// Seed forwarded to the backend for a deterministic game
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            beast_name: "The Black Wolf of Westminster".to_string(),
            inquisitor_name: "Sir Thomas".to_string(),
            seed: None,
        }
    }
}

/// Follow-up checks run once a session id was obtained
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Fetch the session back and confirm the backend knows it
    pub verify_session: bool,
    /// Delete the session at the end of the run
    pub cleanup_session: bool,
}

impl SmokeConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SmokeResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SmokeError::configuration("config_file", format!("Failed to read config file: {}", e))
        })?;

        let config: SmokeConfig = toml::from_str(&content).map_err(|e| {
            SmokeError::configuration("config_format", format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SmokeResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> SmokeResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            SmokeError::configuration("config_serialization", format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            SmokeError::configuration("config_write", format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> SmokeResult<()> {
        validate_http_url("api.base_url", &self.api.base_url)?;
        validate_http_url("frontend.url", &self.frontend.url)?;

        if self.game.beast_name.trim().is_empty() {
            return Err(SmokeError::configuration("game.beast_name", "Beast name must not be empty"));
        }

        if self.game.inquisitor_name.trim().is_empty() {
            return Err(SmokeError::configuration(
                "game.inquisitor_name",
                "Inquisitor name must not be empty",
            ));
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> SmokeResult<()> {
    let url = Url::parse(value)
        .map_err(|e| SmokeError::configuration(field, format!("Invalid URL {:?}: {}", value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(SmokeError::configuration(
            field,
            format!("Unsupported URL scheme {:?}, expected http or https", other),
        )),
    }
}
