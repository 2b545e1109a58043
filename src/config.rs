//! Configuration loading and validation
//!
//! Reads `~/.config/qnachat/config.toml` (or an explicit path) and validates
//! the endpoint section into [`QnaSettings`]. Validation runs before the
//! session starts, so a missing credential never surfaces mid-request.

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

pub use types::{Config, DisplayConfig, EndpointConfig, QnaSettings};

const CONFIG_DIR: &str = "qnachat";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides `endpoint.subscription_key`
pub const SUBSCRIPTION_KEY_ENV: &str = "QNACHAT_SUBSCRIPTION_KEY";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Could not determine the home directory to locate the config file")]
    NoHomeDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("Missing required setting `{0}`")]
    Missing(&'static str),

    #[error("Invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config_from_path(path),
        None => {
            let path = config_path().ok_or(ConfigError::NoHomeDir)?;
            load_config_from_path(&path)
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Validate the endpoint section, applying the environment credential override
pub fn resolve_settings(config: &Config) -> Result<QnaSettings, ConfigError> {
    let env_key = std::env::var(SUBSCRIPTION_KEY_ENV).ok();
    settings_from_endpoint(&config.endpoint, env_key)
}

/// Validate an endpoint section into client settings
///
/// `key_override` wins over the file's `subscription_key` when it is not blank.
pub fn settings_from_endpoint(
    endpoint: &EndpointConfig,
    key_override: Option<String>,
) -> Result<QnaSettings, ConfigError> {
    let base_url = required(&endpoint.base_url, "endpoint.base_url")?;
    reqwest::Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
        key: "endpoint.base_url",
        reason: e.to_string(),
    })?;

    let subscription_key = match key_override.filter(|k| !k.trim().is_empty()) {
        Some(key) => key.trim().to_string(),
        None => required(&endpoint.subscription_key, "endpoint.subscription_key")?,
    };

    if endpoint.timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            key: "endpoint.timeout_secs",
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(QnaSettings {
        base_url,
        project_name: required(&endpoint.project_name, "endpoint.project_name")?,
        api_version: required(&endpoint.api_version, "endpoint.api_version")?,
        deployment_name: required(&endpoint.deployment_name, "endpoint.deployment_name")?,
        subscription_key,
        timeout: Duration::from_secs(endpoint.timeout_secs),
    })
}

fn required(value: &Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value
        .as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::Missing(key))
}
