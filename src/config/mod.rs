mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`).
///
/// A missing file yields the built-in defaults. `HF_API_TOKEN`, when set,
/// replaces `inference.api_key`.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").ok();
    let api_token = env::var("HF_API_TOKEN").ok();

    load_with(config_path.as_deref(), api_token).await
}

/// Same as [`load`] with the environment lookups passed in. An empty token
/// leaves the file's key untouched.
pub async fn load_with(config_path: Option<&str>, api_token: Option<String>) -> Result<Config> {
    let config_path = config_path.unwrap_or("config.yaml");

    let mut config = load_from(config_path).await?;

    if let Some(token) = api_token.filter(|token| !token.is_empty()) {
        config.inference.api_key = Some(token);
    }

    Ok(config)
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!(
            "Configuration file {} not found, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    if config.inference.summary.min_length > config.inference.summary.max_length {
        return Err(crate::Error::config(format!(
            "summary.min_length ({}) exceeds summary.max_length ({})",
            config.inference.summary.min_length, config.inference.summary.max_length
        )));
    }

    Ok(config)
}
