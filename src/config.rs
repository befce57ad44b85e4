use crate::{
    domain::BoardConfig,
    error::{KancliError, Result},
    theme::Theme,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Startup configuration; every field falls back to its default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: BoardConfig,
    pub theme: Theme,
}

impl Config {
    /// Loads a JSON config file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| KancliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}
