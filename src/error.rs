use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KancliError>;

#[derive(Debug, Error)]
pub enum KancliError {
    #[error("Index {index} out of bounds for column of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Seed file not found: {}", .0.display())]
    SeedNotFound(PathBuf),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
