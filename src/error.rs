//! Error handling for the ATS engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsEngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsEngineError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsEngineError {
    fn from(err: anyhow::Error) -> Self {
        AtsEngineError::InvalidInput(err.to_string())
    }
}
