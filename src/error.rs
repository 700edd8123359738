//! Error handling for the resume analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input too large: {0}")]
    InputTooLarge(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        AnalyzerError::InvalidInput(err.to_string())
    }
}
