//! Runner configuration
//!
//! Loaded from a JSON file; every field has a default so an empty object
//! is a valid configuration.

use crate::payload::OrderPayload;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Book name, used in log lines
    #[serde(default = "default_name")]
    pub name: String,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Capacity of the book worker's command channel
    #[serde(default = "default_command_buffer_size")]
    pub command_buffer_size: usize,

    /// Orders submitted before any input is read
    #[serde(default)]
    pub seed_orders: Vec<OrderPayload>,
}

fn default_name() -> String {
    "floe".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_command_buffer_size() -> usize {
    1024
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            command_buffer_size: default_command_buffer_size(),
            seed_orders: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.command_buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "command_buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
