use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Environment variable overriding the endpoint from the YAML file
pub const URI_ENV: &str = "AUTOSOCKET_URI";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Console client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// WebSocket endpoint (ws:// or wss://)
    #[serde(default)]
    pub uri: String,
    /// Fixed delay between a close and the next attempt
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_reconnect_delay_ms() -> u64 {
    autosocket::DEFAULT_RECONNECT_DELAY.as_millis() as u64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, then apply overrides
    ///
    /// A missing file is not an error; every field has a default and the
    /// endpoint can come from `AUTOSOCKET_URI` or the command line.
    /// `uri_arg` wins over the environment, which wins over the file.
    pub fn load(config_path: impl AsRef<Path>, uri_arg: Option<String>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let mut config = if config_path.exists() {
            let yaml_content = std::fs::read_to_string(config_path)?;
            Self::from_yaml(&yaml_content)?
        } else {
            Self::default()
        };

        config.apply_overrides(std::env::var(URI_ENV).ok(), uri_arg);
        config.validate()?;

        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Replace the endpoint, argument first, then environment
    pub fn apply_overrides(&mut self, env_uri: Option<String>, uri_arg: Option<String>) {
        if let Some(uri) = uri_arg.or(env_uri).filter(|uri| !uri.trim().is_empty()) {
            self.uri = uri;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "uri is required (config file, {} or first argument)",
                URI_ENV
            )));
        }

        if self.reconnect_delay_ms == 0 {
            return Err(ConfigError::ValidationError(
                "reconnect_delay_ms must be greater than 0".to_string(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Endpoint: {}", self.uri);
        info!("  Reconnect delay: {} ms", self.reconnect_delay_ms);
        info!("  Log level: {}", self.log_level);
    }
}
