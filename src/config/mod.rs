mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Builds the process configuration from the environment and the working
/// directory. See [`load_with`].
pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok(), Path::new(DEFAULT_CONFIG_PATH)).await
}

/// Builds the configuration: YAML file if one is present, then
/// environment-style overrides from `lookup`, then validation.
///
/// `CONFIG_PATH` names a file that must exist. Without it, `default_path` is
/// used when present, otherwise the defaults.
pub async fn load_with<F>(lookup: F, default_path: &Path) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup("CONFIG_PATH") {
        Some(path) => load_file(&path).await?,
        None if default_path.exists() => load_file(&default_path.to_string_lossy()).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_overrides(&lookup)?;
    config.validate()?;

    Ok(config)
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies environment-style overrides. `lookup` returns the value for a
    /// variable name, or `None` when unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.server.logs.level = level;
        }
        if let Some(url) = lookup("AI_SERVICE_URL") {
            self.interpreter.base_url = url;
        }
        if let Some(secs) = lookup("AI_SERVICE_TIMEOUT_SECS") {
            self.interpreter.timeout_secs = secs.parse().map_err(|_| {
                Error::config(format!("Invalid AI_SERVICE_TIMEOUT_SECS: '{}'", secs))
            })?;
        }
        if let Some(url) = lookup("BACKEND_URL") {
            self.client.backend_url = url;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_url("interpreter.base_url", &self.interpreter.base_url)?;
        validate_url("client.backend_url", &self.client.backend_url)?;

        if self.interpreter.timeout_secs == 0 {
            return Err(Error::config("interpreter.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::config(format!(
            "{} must start with http:// or https://, got '{}'",
            field, value
        )))
    }
}
