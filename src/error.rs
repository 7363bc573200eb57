//! Error types for the application.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Logging setup failed: {0}")]
    Logging(String),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}
