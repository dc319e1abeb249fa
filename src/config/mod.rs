mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Loads the configuration file (if any), applies environment overrides and validates the result.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;
    config.apply_env_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Environment wins over the file for the credential, model and listening port.
    /// `MODEL_NAME` and `FLASK_PORT` are honoured for older deployments; `PORT` beats `FLASK_PORT`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()) {
            self.llm.api_key = api_key;
        }

        if let Some(model) = lookup("MODEL_NAME").filter(|model| !model.trim().is_empty()) {
            self.llm.model = model;
        }

        if let Some(port) = lookup("PORT").or_else(|| lookup("FLASK_PORT")) {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.llm.has_credential() {
            return Err(Error::config(
                "GEMINI_API_KEY not found: set it in the environment or llm.api_key",
            ));
        }

        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }

        let level = self.server.logs.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config(format!(
                "Invalid log level: '{}'. Valid levels: {}",
                self.server.logs.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
