//! Resolve [`ServerConfig`] from environment variables (`.env` honoured via dotenvy).

use super::types::ServerConfig;
use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_DATA_FILE: &str = "RECIPES_FILE";
pub const ENV_HOST: &str = "RECIPES_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_MAX_BODY_BYTES: &str = "RECIPES_MAX_BODY_BYTES";
pub const ENV_CREATE_IF_MISSING: &str = "RECIPES_CREATE_IF_MISSING";

impl ServerConfig {
    /// Read config from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Read config through `lookup`. Missing or empty values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = ServerConfig::default();

        if let Some(path) = get(ENV_DATA_FILE) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(host) = get(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            config.port = parse_value(ENV_PORT, port)?;
        }
        if let Some(limit) = get(ENV_MAX_BODY_BYTES) {
            config.max_body_bytes = parse_value(ENV_MAX_BODY_BYTES, limit)?;
        }
        if let Some(flag) = get(ENV_CREATE_IF_MISSING) {
            config.create_if_missing = parse_bool(ENV_CREATE_IF_MISSING, flag)?;
        }
        Ok(config)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
