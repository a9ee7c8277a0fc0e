//! Error handling for the CV matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CvMatchError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CvMatchError {
    fn from(err: anyhow::Error) -> Self {
        CvMatchError::InvalidInput(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for CvMatchError {
    fn from(err: aho_corasick::BuildError) -> Self {
        CvMatchError::Configuration(format!("Failed to build keyword matcher: {}", err))
    }
}
