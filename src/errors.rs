use std::result::Result as StdResult;

use finsight_config::ConfigError;
use finsight_core::{CoreError, StoreError};
use thiserror::Error;

/// Unified error type for the library facade and the CLI.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, AppError>;

impl AppError {
    /// Process exit code reported by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) | AppError::Core(CoreError::InvalidParameters(_)) => 2,
            AppError::Core(CoreError::ScenarioNotFound(_)) => 2,
            AppError::Config(_) => 3,
            _ => 1,
        }
    }
}
