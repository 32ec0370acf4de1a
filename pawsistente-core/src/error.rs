//! Error types for pawsistente.

use thiserror::Error;

/// Errors that can occur in pawsistente operations.
#[derive(Error, Debug)]
pub enum PawsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid date/time '{0}'")]
    DateParse(String),

    #[error("Invalid event '{id}': {reason}")]
    InvalidEvent { id: String, reason: String },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("Unknown convention day '{0}'")]
    UnknownDay(String),

    #[error("Unknown language '{0}'. Expected 'es' or 'en'")]
    UnknownLanguage(String),
}

impl From<serde_json::Error> for PawsError {
    fn from(err: serde_json::Error) -> Self {
        PawsError::Serialization(err.to_string())
    }
}

/// Result type alias for pawsistente operations.
pub type PawsResult<T> = Result<T, PawsError>;
