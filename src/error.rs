use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Failed to read configuration file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path:?}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AnalyzerError {
    /// Whether this error comes from the task list rather than the run itself
    pub fn is_config_error(&self) -> bool {
        matches!(self, AnalyzerError::ConfigRead { .. } | AnalyzerError::ConfigParse { .. })
    }
}

pub type AnalyzerResult<T> = std::result::Result<T, AnalyzerError>;
